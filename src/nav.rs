//! Selection state, and the directional moves which change it.

use log::debug;

use crate::{error::NodeError, node::{NodeId, SymbolTree}};

/// A decoded navigation request from the presentation layer. These are independent of whichever
/// keys or buttons produced them.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Intent {
    /// Select the previous sibling.
    Left,

    /// Select the next sibling.
    Right,

    /// Select the parent.
    Up,

    /// Select the first child.
    Down,

    /// Select the root, if nothing is selected yet.
    FocusRoot,
}

/// The result of applying an [Intent].
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum NavOutcome {
    /// The selection moved to this node.
    Moved(NodeId),

    /// There was nowhere to go, so the selection was left alone.
    Unchanged,
}

/// Which node, if any, is currently selected.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct Selection {
    selected: Option<NodeId>,
}

impl Selection {
    /// Creates a selection with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Selects `node`, replacing any previous selection. The node must be alive and reachable from
    /// the root of `tree`.
    pub fn select(&mut self, tree: &SymbolTree, node: NodeId) -> Result<(), NodeError> {
        tree.node(node)?;
        if !tree.is_attached(node) {
            return Err(NodeError::Detached(node));
        }
        self.selected = Some(node);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Works out where `intent` would move the selection, without moving it.
    pub fn target(&self, tree: &SymbolTree, intent: Intent) -> Option<NodeId> {
        let selected = match self.selected {
            Some(id) if tree.is_attached(id) => id,

            // Tab only picks the root when nothing else is picked
            _ => return match intent {
                Intent::FocusRoot => Some(tree.root()),
                _ => None,
            },
        };

        match intent {
            Intent::Left => {
                let parent = tree.parent(selected)?;
                let index = tree.child_index(selected)?;
                if index > 0 {
                    tree.child(parent, index - 1)
                } else {
                    None
                }
            }

            Intent::Right => {
                let parent = tree.parent(selected)?;
                let index = tree.child_index(selected)?;
                if index + 1 < tree.num_children(parent) {
                    tree.child(parent, index + 1)
                } else {
                    None
                }
            }

            Intent::Up => tree.parent(selected),

            Intent::Down => {
                if tree.is_compound(selected) {
                    tree.child(selected, 0)
                } else {
                    None
                }
            }

            // With a selection already in place, there's nothing to focus
            Intent::FocusRoot => None,
        }
    }

    /// Applies `intent`, moving the selection if there is somewhere to move to.
    pub fn apply(&mut self, tree: &SymbolTree, intent: Intent) -> NavOutcome {
        match self.target(tree, intent) {
            Some(next) => {
                debug!("{:?}: {:?} -> {:?}", intent, self.selected, next);
                self.selected = Some(next);
                NavOutcome::Moved(next)
            }
            None => {
                debug!("{:?}: no move from {:?}", intent, self.selected);
                NavOutcome::Unchanged
            }
        }
    }
}
