//! A structural editor for symbolic expressions.
//!
//! Expressions are trees of [symbols](node): placeholders, variables, and compound operators which
//! hold child symbols of their own. An [Editor] session keeps one such tree and a selection, and is
//! driven by a presentation layer which forwards typed tokens and decoded navigation
//! [intents](nav::Intent).

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod node;
pub mod registry;
pub mod resolve;
pub mod nav;
pub mod editor;
pub mod message;
pub mod render;
pub mod renderers;

#[cfg(test)]
mod tests;

pub use crate::{
    editor::{Editor, EditorSettings, CommitOutcome},
    nav::{Intent, NavOutcome},
    node::{NodeId, NodeKind, Operator, Symbol, SymbolTree},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
