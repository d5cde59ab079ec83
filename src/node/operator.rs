/// A compound operator, which may appear in a symbol tree holding a fixed number of child symbols.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Operator {
    Addition,
}

impl Operator {
    /// Every operator, in the order they are looked up when resolving commands.
    pub const ALL: &'static [Operator] = &[Operator::Addition];

    /// The command name which constructs this operator when typed after the command prefix.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Addition => "add",
        }
    }

    /// The suggested text drawn between this operator's children.
    /// (Renderer implementations are free to ignore this.)
    pub fn render_symbol(&self) -> &'static str {
        match self {
            Self::Addition => "+",
        }
    }

    /// A human-readable name, used in status messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
        }
    }

    /// The number of children for this operator. Nodes of this operator are created with exactly
    /// this many placeholder children, and the count never changes afterwards.
    pub fn arity(&self) -> usize {
        match self {
            Self::Addition => 2,
        }
    }

    /// Looks up the operator constructed by the given command name, without its prefix.
    pub fn from_command(name: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.command_name() == name)
    }
}
