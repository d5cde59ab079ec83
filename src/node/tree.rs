//! The arena which owns every node, and read access to it.

use alloc::{format, vec, vec::Vec};

use crate::error::{InvariantViolation, NodeError};

use super::{Node, NodeId, NodeKind, Symbol};

#[derive(PartialEq, Eq, Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) node: Option<Node>,
}

/// A tree of symbols with exactly one root.
///
/// All nodes live in a slab of slots. Discarded nodes free their slot for reuse, bumping its
/// generation so that stale [NodeId]s stop resolving.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SymbolTree {
    pub(crate) slots: Vec<Slot>,
    pub(crate) free: Vec<u32>,
    pub(crate) root: NodeId,
}

impl SymbolTree {
    /// Creates a tree consisting of a single placeholder root.
    pub fn new() -> Self {
        let root_node = Node { parent: None, depth: 0, kind: NodeKind::Placeholder };
        Self {
            slots: vec![Slot { generation: 0, node: Some(root_node) }],
            free: vec![],
            root: NodeId::new(0, 0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for a handle, or `None` if it has been discarded.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    /// Like [get](SymbolTree::get), but with an error suitable for propagating.
    pub fn node(&self, id: NodeId) -> Result<&Node, NodeError> {
        self.get(id).ok_or(NodeError::StaleNode(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent()
    }

    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.get(id).map(Node::depth)
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.get(id)?.child(index)
    }

    /// The number of children of a node; zero for leaves and discarded nodes.
    pub fn num_children(&self, id: NodeId) -> usize {
        self.get(id).map_or(0, Node::num_children)
    }

    pub fn is_compound(&self, id: NodeId) -> bool {
        self.get(id).map_or(false, Node::is_compound)
    }

    pub fn symbol(&self, id: NodeId) -> Option<Symbol> {
        self.get(id).map(Node::symbol)
    }

    pub fn letter(&self, id: NodeId) -> Option<char> {
        self.get(id)?.letter()
    }

    /// Finds the index of a node among its parent's children, by scanning the parent's child list.
    ///
    /// Returns `None` for the root, for a node which has been discarded, and for a node which has
    /// been [built](SymbolTree::build) but not yet installed in its parent.
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        let parent_id = self.get(id)?.parent()?;
        self.get(parent_id)?
            .children()
            .iter()
            .position(|c| *c == id)
    }

    /// Returns true if the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            let node = match self.get(current) {
                Some(n) => n,
                None => return false,
            };

            match node.parent() {
                None => return current == self.root,
                Some(parent_id) => {
                    let listed = self.get(parent_id)
                        .map_or(false, |p| p.children().contains(&current));
                    if !listed {
                        return false;
                    }
                    current = parent_id;
                }
            }
        }
    }

    /// The number of nodes currently alive in the arena, including any detached ones.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the nodes of the subtree rooted at `id`, in pre-order (each node before its
    /// children, children from first to last).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = vec![];
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if let Some(node) = self.get(current) {
                result.push(current);
                stack.extend(node.children().iter().rev().copied());
            }
        }

        result
    }

    /// Checks every structural invariant of the tree:
    ///
    ///   - The root is alive, has no parent, and has depth 0.
    ///   - Every child's parent link points at the node which holds it, and its depth is one more
    ///     than its parent's.
    ///   - Every compound node has exactly as many children as its operator's arity.
    ///   - No node appears twice, and every live node is reachable from the root.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let root = self.get(self.root)
            .ok_or_else(|| InvariantViolation(format!("root {:?} is not alive", self.root)))?;
        if root.parent().is_some() {
            return Err(InvariantViolation(format!("root {:?} has a parent", self.root)));
        }
        if root.depth() != 0 {
            return Err(InvariantViolation(format!("root {:?} has depth {}", self.root, root.depth())));
        }

        let mut seen = vec![false; self.slots.len()];
        let mut visited = 0;
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            let node = self.get(id)
                .ok_or_else(|| InvariantViolation(format!("node {:?} is not alive", id)))?;

            if seen[id.index()] {
                return Err(InvariantViolation(format!("node {:?} is reachable twice", id)));
            }
            seen[id.index()] = true;
            visited += 1;

            if let NodeKind::Compound { operator, children } = node.kind() {
                if children.len() != operator.arity() {
                    return Err(InvariantViolation(format!(
                        "{:?} node {:?} has {} children", operator, id, children.len()
                    )));
                }
            }

            for child_id in node.children() {
                let child = self.get(*child_id)
                    .ok_or_else(|| InvariantViolation(format!("child {:?} is not alive", child_id)))?;
                if child.parent() != Some(id) {
                    return Err(InvariantViolation(format!(
                        "child {:?} of {:?} claims parent {:?}", child_id, id, child.parent()
                    )));
                }
                if child.depth() != node.depth() + 1 {
                    return Err(InvariantViolation(format!(
                        "child {:?} has depth {} under a parent of depth {}",
                        child_id, child.depth(), node.depth()
                    )));
                }
                stack.push(*child_id);
            }
        }

        let alive = self.len();
        if visited != alive {
            return Err(InvariantViolation(format!(
                "{} nodes are alive but only {} are reachable from the root", alive, visited
            )));
        }

        Ok(())
    }
}

impl Default for SymbolTree {
    fn default() -> Self {
        Self::new()
    }
}
