//! The symbol tree: placeholders, variables and compound operators, stored in an arena.
//!
//! Nodes refer to each other by [NodeId] rather than by reference. Each compound node owns its
//! children exclusively; each child keeps a back-link to its parent which is only ever used to move
//! upwards or to find the child's position among its siblings.
//!
//! After construction, the only way the tree changes is through
//! [replace](SymbolTree::replace) (or the lower-level [set_child](SymbolTree::set_child)), which
//! swap a whole subtree for a freshly built one.

mod operator;
pub use operator::*;

mod tree;
pub use tree::*;

mod mutate;

use alloc::vec::Vec;

/// A handle to a node in a [SymbolTree].
///
/// Handles are generational: once a node is discarded, its handle never refers to any other node,
/// even if the underlying arena slot is reused.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) fn index(&self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

/// A detached description of a symbol, without any children or position. This is what the token
/// resolver produces; [SymbolTree::build] turns it into a real node.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Symbol {
    /// An unfilled slot.
    Placeholder,

    /// A variable, denoted by a letter from the variable registry.
    Variable(char),

    /// A compound operator. Its children start out as placeholders.
    Compound(Operator),
}

/// The variant-specific contents of a node.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum NodeKind {
    Placeholder,
    Variable(char),

    /// An operator and its children. The length of `children` always equals the operator's
    /// [arity](Operator::arity).
    Compound { operator: Operator, children: Vec<NodeId> },
}

/// A single node in a [SymbolTree].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: usize,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// The compound node which holds this one, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// How far below the root this node was created. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The kind of this node without its children.
    pub fn symbol(&self) -> Symbol {
        match self.kind {
            NodeKind::Placeholder => Symbol::Placeholder,
            NodeKind::Variable(letter) => Symbol::Variable(letter),
            NodeKind::Compound { operator, .. } => Symbol::Compound(operator),
        }
    }

    /// The letter of a variable node, or `None` for any other kind.
    pub fn letter(&self) -> Option<char> {
        match self.kind {
            NodeKind::Variable(letter) => Some(letter),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            NodeKind::Compound { operator, .. } => Some(operator),
            _ => None,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.kind, NodeKind::Compound { .. })
    }

    /// The children of this node. Leaves have none.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Compound { children, .. } => children,
            _ => &[],
        }
    }

    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    pub fn child(&self, index: usize) -> Option<NodeId> {
        self.children().get(index).copied()
    }
}
