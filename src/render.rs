//! The boundary with presentation layers.
//!
//! A symbol tree is flattened into a sequence of [Glyph]s in reading order, which a [Renderer]
//! then draws however it likes. Each glyph carries the node it came from, so that clicks on a drawn
//! glyph can be turned back into a selection, and the node's depth, for stacking nested elements.

use alloc::{vec, vec::Vec};

use crate::node::{NodeId, NodeKind, Operator, SymbolTree};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Glyph {
    Placeholder,
    Variable { letter: char },

    /// Drawn between each pair of an operator's children.
    Operator { operator: Operator },

    /// Nested compound nodes are surrounded by parentheses, so that the tree's shape is visible.
    LeftParenthesis,
    RightParenthesis,

    SelectionStart,
    SelectionEnd,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PlacedGlyph {
    pub glyph: Glyph,
    pub node: NodeId,
    pub depth: usize,
}

/// Flattens the tree into glyphs, in reading order.
pub fn glyphs(tree: &SymbolTree, selection: Option<NodeId>) -> Vec<PlacedGlyph> {
    let mut result = vec![];
    push_glyphs(tree, tree.root(), selection, &mut result);
    result
}

fn push_glyphs(tree: &SymbolTree, id: NodeId, selection: Option<NodeId>, result: &mut Vec<PlacedGlyph>) {
    let node = match tree.get(id) {
        Some(n) => n,
        None => return,
    };
    let place = |glyph| PlacedGlyph { glyph, node: id, depth: node.depth() };

    let selected = selection == Some(id);
    if selected {
        result.push(place(Glyph::SelectionStart));
    }

    match node.kind() {
        NodeKind::Placeholder => result.push(place(Glyph::Placeholder)),
        NodeKind::Variable(letter) => result.push(place(Glyph::Variable { letter: *letter })),
        NodeKind::Compound { operator, children } => {
            let nested = node.parent().is_some();
            if nested {
                result.push(place(Glyph::LeftParenthesis));
            }

            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    result.push(place(Glyph::Operator { operator: *operator }));
                }
                push_glyphs(tree, *child, selection, result);
            }

            if nested {
                result.push(place(Glyph::RightParenthesis));
            }
        }
    }

    if selected {
        result.push(place(Glyph::SelectionEnd));
    }
}

pub trait Renderer {
    /// Prepare an empty draw surface.
    fn init(&mut self);

    /// Draw the next glyph, after all glyphs drawn so far.
    fn draw(&mut self, glyph: PlacedGlyph);

    /// Clears the surface and draws an entire tree, highlighting the selected node if there is one.
    fn draw_all(&mut self, tree: &SymbolTree, selection: Option<NodeId>) {
        self.init();
        for glyph in glyphs(tree, selection) {
            self.draw(glyph);
        }
    }
}
