//! The fixed alphabet of names which a [Variable](crate::node::NodeKind::Variable) may take.

use alloc::collections::BTreeSet;

/// An immutable set of single-character variable names.
///
/// The set contains the Latin letters `a`-`z` and `A`-`Z`, plus the first 25 codepoints of the
/// lowercase and uppercase Greek alphabets (`α`-`ω` and `Α`-`Ω`).
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct VariableRegistry {
    names: BTreeSet<char>,
}

impl VariableRegistry {
    /// The number of codepoints taken from each Greek block.
    pub const GREEK_LETTERS: u32 = 25;

    pub fn new() -> Self {
        let mut names = BTreeSet::new();
        names.extend('a'..='z');
        names.extend('A'..='Z');
        names.extend(Self::greek_run('α'));
        names.extend(Self::greek_run('Α'));

        Self { names }
    }

    fn greek_run(first: char) -> impl Iterator<Item = char> {
        (0..Self::GREEK_LETTERS).filter_map(move |i| char::from_u32(first as u32 + i))
    }

    /// Returns the letter named by `text`, if `text` is exactly one registered character.
    pub fn lookup(&self, text: &str) -> Option<char> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if self.names.contains(&c) => Some(c),
            _ => None,
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        self.names.contains(&letter)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.names.iter().copied()
    }
}

impl Default for VariableRegistry {
    fn default() -> Self {
        Self::new()
    }
}
