use alloc::string::String;

use crate::render::{Glyph, PlacedGlyph, Renderer};

/// Draws a symbol tree onto a single line of text.
///
/// Placeholders are drawn as `▢`, variables as their letter, and operators between their children
/// with a space either side. The selected node is wrapped in square brackets.
#[derive(Default, Clone, Debug)]
pub struct AsciiRenderer {
    pub line: String,
}

impl Renderer for AsciiRenderer {
    fn init(&mut self) {
        self.line = String::new();
    }

    fn draw(&mut self, glyph: PlacedGlyph) {
        match glyph.glyph {
            Glyph::Placeholder => self.line.push('▢'),
            Glyph::Variable { letter } => self.line.push(letter),
            Glyph::Operator { operator } => {
                self.line.push(' ');
                self.line.push_str(operator.render_symbol());
                self.line.push(' ');
            },
            Glyph::LeftParenthesis => self.line.push('('),
            Glyph::RightParenthesis => self.line.push(')'),
            Glyph::SelectionStart => self.line.push('['),
            Glyph::SelectionEnd => self.line.push(']'),
        }
    }
}
