use alloc::string::String;

use thiserror::Error;

use crate::node::NodeId;

/// A request to the symbol tree which could not be carried out. The tree is always left untouched
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("node {0:?} is no longer part of the tree")]
    StaleNode(NodeId),

    #[error("node {0:?} has no children")]
    NotCompound(NodeId),

    #[error("child index {index} is out of range for a node with {arity} children")]
    IndexOutOfRange { index: usize, arity: usize },

    #[error("node {node:?} was built for a different parent")]
    ParentMismatch { node: NodeId },

    #[error("node {0:?} is already attached to the tree")]
    AlreadyAttached(NodeId),

    #[error("node {0:?} is not attached to the tree")]
    Detached(NodeId),
}

/// Why a typed token did not produce a new symbol. These are never fatal; the `Display` text is
/// shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Nothing to add")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Could not understand '{0}'")]
    Unrecognised(String),
}

/// A broken structural invariant, found by [SymbolTree::verify](crate::node::SymbolTree::verify).
/// The mutators never produce one of these; seeing one means there is a bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InvariantViolation(pub String);
