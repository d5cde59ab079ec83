//! Construction of new nodes, and in-place replacement of existing ones.

use alloc::{vec, vec::Vec};

use log::debug;

use crate::error::NodeError;

use super::{tree::Slot, Node, NodeId, NodeKind, Symbol, SymbolTree};

impl SymbolTree {
    fn allocate(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, node: Some(node) });
            NodeId::new(index, 0)
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    /// Constructs a new, detached node for `symbol`, wired up to `parent` (or `None` if it is
    /// destined to become the root). Compound symbols are built with a placeholder for each of their
    /// children.
    ///
    /// The node is not reachable from the root until it is installed with
    /// [replace](SymbolTree::replace) or [set_child](SymbolTree::set_child).
    pub fn build(&mut self, parent: Option<NodeId>, symbol: Symbol) -> Result<NodeId, NodeError> {
        let depth = match parent {
            Some(parent_id) => {
                let parent_node = self.node(parent_id)?;
                if !parent_node.is_compound() {
                    return Err(NodeError::NotCompound(parent_id));
                }
                parent_node.depth() + 1
            }
            None => 0,
        };

        let kind = match symbol {
            Symbol::Placeholder => NodeKind::Placeholder,
            Symbol::Variable(letter) => NodeKind::Variable(letter),
            Symbol::Compound(operator) => NodeKind::Compound { operator, children: vec![] },
        };
        let id = self.allocate(Node { parent, depth, kind });

        if let Symbol::Compound(operator) = symbol {
            let children = (0..operator.arity())
                .map(|_| self.allocate(Node {
                    parent: Some(id),
                    depth: depth + 1,
                    kind: NodeKind::Placeholder,
                }))
                .collect::<Vec<_>>();

            if let Some(Node { kind: NodeKind::Compound { children: slots, .. }, .. }) = self.node_mut(id) {
                *slots = children;
            }
        }

        Ok(id)
    }

    /// Frees a node and its entire subtree. Handles to any of them become stale.
    fn discard(&mut self, id: NodeId) {
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let slot = match self.slots.get_mut(current.index()) {
                Some(slot) if slot.generation == current.generation() => slot,
                _ => continue,
            };

            if let Some(node) = slot.node.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index() as u32);
                stack.extend(node.children());
            }
        }
    }

    /// Returns true if `id` is alive but not held by anything: either built with no parent and not
    /// the root, or built with a parent which does not list it.
    fn is_detached(&self, id: NodeId) -> bool {
        match self.get(id) {
            None => false,
            Some(node) => match node.parent() {
                None => id != self.root,
                Some(parent_id) => self.get(parent_id)
                    .map_or(true, |p| !p.children().contains(&id)),
            },
        }
    }

    /// Overwrites the child of `parent` at `index` with `node`, discarding the previous child and
    /// its subtree.
    ///
    /// `node` must have been [built](SymbolTree::build) with `parent` as its parent, and must not
    /// be attached anywhere yet. If any of this doesn't hold, an error is returned and the tree is
    /// unchanged; as with [replace](SymbolTree::replace), a rejected detached `node` is discarded.
    pub fn set_child(&mut self, parent: NodeId, index: usize, node: NodeId) -> Result<(), NodeError> {
        let detached = self.is_detached(node);
        let result = self.set_child_checked(parent, index, node);
        if result.is_err() && detached {
            self.discard(node);
        }
        result
    }

    fn set_child_checked(&mut self, parent: NodeId, index: usize, node: NodeId) -> Result<(), NodeError> {
        let new_parent = self.node(node)?.parent();
        let parent_node = self.node(parent)?;
        let arity = parent_node.num_children();

        if !parent_node.is_compound() {
            return Err(NodeError::NotCompound(parent));
        }
        if index >= arity {
            return Err(NodeError::IndexOutOfRange { index, arity });
        }
        if new_parent != Some(parent) {
            return Err(NodeError::ParentMismatch { node });
        }
        if parent_node.children().contains(&node) {
            return Err(NodeError::AlreadyAttached(node));
        }

        let old = match self.node_mut(parent) {
            Some(Node { kind: NodeKind::Compound { children, .. }, .. }) =>
                core::mem::replace(&mut children[index], node),
            _ => return Err(NodeError::NotCompound(parent)),
        };
        self.discard(old);

        debug!("replaced child {} of {:?}: {:?} -> {:?}", index, parent, old, node);
        Ok(())
    }

    /// Replaces `target`, which must be attached to the tree, with the detached node `new`.
    ///
    /// If `target` has a parent, `new` takes its place among the parent's children. Otherwise
    /// `target` is the root, and `new` becomes the new root. Either way, `target` and its subtree
    /// are discarded.
    ///
    /// `new` must have been built with the same parent as `target`. The replacement either happens
    /// entirely, or not at all; if it is rejected, the detached `new` subtree is discarded.
    pub fn replace(&mut self, target: NodeId, new: NodeId) -> Result<(), NodeError> {
        if !self.contains(new) {
            return Err(NodeError::StaleNode(new));
        }
        if !self.is_detached(new) {
            return Err(NodeError::AlreadyAttached(new));
        }

        let result = self.replace_checked(target, new);
        if result.is_err() {
            self.discard(new);
        }
        result
    }

    fn replace_checked(&mut self, target: NodeId, new: NodeId) -> Result<(), NodeError> {
        let target_parent = self.node(target)?.parent();
        if !self.is_attached(target) {
            return Err(NodeError::Detached(target));
        }
        if self.node(new)?.parent() != target_parent {
            return Err(NodeError::ParentMismatch { node: new });
        }

        match target_parent {
            Some(parent) => {
                let index = self.child_index(target).ok_or(NodeError::Detached(target))?;
                self.set_child_checked(parent, index, new)
            }
            None => {
                let old_root = self.root;
                self.root = new;
                self.discard(old_root);

                debug!("replaced root: {:?} -> {:?}", old_root, new);
                Ok(())
            }
        }
    }
}
