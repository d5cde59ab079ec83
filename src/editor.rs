//! The editing session, which ties the tree, selection and resolver together.

use alloc::{format, string::ToString};

use log::{info, warn};

use crate::{
    error::{NodeError, TokenError},
    message::Message,
    nav::{Intent, NavOutcome, Selection},
    node::{NodeId, Symbol, SymbolTree},
    registry::VariableRegistry,
    resolve::Resolver,
};

/// Settings which control how an [Editor] interprets input.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct EditorSettings {
    /// The character which marks a token as a command, such as `/add`.
    pub command_prefix: char,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self { command_prefix: '/' }
    }
}

/// What happened as a result of [Editor::commit_token].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CommitOutcome {
    /// The newly created and selected node, or `None` if the token was rejected and nothing
    /// changed.
    pub selected: Option<NodeId>,

    /// A status message describing the result.
    pub message: Message,
}

/// A single editing session over one symbol tree.
///
/// Presentation layers should drive the session through [commit_token](Editor::commit_token),
/// [navigate](Editor::navigate), [select](Editor::select) and [deselect](Editor::deselect), and
/// may read anything through [tree](Editor::tree) to draw it. Every operation either fully applies
/// or changes nothing.
#[derive(Debug, Clone)]
pub struct Editor {
    settings: EditorSettings,
    registry: VariableRegistry,
    tree: SymbolTree,
    selection: Selection,
    message: Message,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    /// Creates a session with a single placeholder as the root, and nothing selected.
    pub fn with_settings(settings: EditorSettings) -> Self {
        let editor = Self {
            settings,
            registry: VariableRegistry::new(),
            tree: SymbolTree::new(),
            selection: Selection::new(),
            message: Message::new("Smbl has been initialized."),
        };

        info!("initialized with {} variable names", editor.registry.len());
        editor
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn tree(&self) -> &SymbolTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selection.get()
    }

    /// The most recent status message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Resolves `text` and, if it names something, replaces the selected node with it and selects
    /// the replacement. With nothing selected, the root is replaced.
    ///
    /// A rejected token leaves the tree and selection untouched; the returned message says why.
    pub fn commit_token(&mut self, text: &str) -> CommitOutcome {
        let resolver = Resolver::new(&self.registry, self.settings.command_prefix);
        let symbol = match resolver.resolve(text) {
            Ok(symbol) => symbol,
            Err(err) => return self.reject(err),
        };

        let target = self.selection.get()
            .filter(|id| self.tree.is_attached(*id))
            .unwrap_or_else(|| self.tree.root());

        match self.install(target, symbol) {
            Ok(new) => {
                self.message = Message::new(format!("Adding {}", describe(symbol, text)));
                info!("{}", self.message);

                CommitOutcome { selected: Some(new), message: self.message.clone() }
            }

            // The target always comes from the live tree, so this can only be a bug
            Err(err) => {
                debug_assert!(false, "failed to replace selected node {:?}: {}", target, err);
                warn!("failed to replace selected node {:?}: {}", target, err);
                self.message = Message::new(err.to_string());
                CommitOutcome { selected: None, message: self.message.clone() }
            }
        }
    }

    fn install(&mut self, target: NodeId, symbol: Symbol) -> Result<NodeId, NodeError> {
        let parent = self.tree.node(target)?.parent();
        let new = self.tree.build(parent, symbol)?;
        self.tree.replace(target, new)?;
        self.selection.select(&self.tree, new)?;
        Ok(new)
    }

    fn reject(&mut self, err: TokenError) -> CommitOutcome {
        warn!("rejected token: {}", err);
        self.message = Message::new(err.to_string());
        CommitOutcome { selected: None, message: self.message.clone() }
    }

    /// Moves the selection according to `intent`. Moves with nowhere to go leave the selection
    /// alone.
    pub fn navigate(&mut self, intent: Intent) -> NavOutcome {
        self.selection.apply(&self.tree, intent)
    }

    /// Selects a node directly, e.g. because it was clicked.
    pub fn select(&mut self, node: NodeId) -> Result<(), NodeError> {
        self.selection.select(&self.tree, node)
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(symbol: Symbol, text: &str) -> &str {
    match symbol {
        Symbol::Compound(operator) => operator.name(),
        _ => text,
    }
}
