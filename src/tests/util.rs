macro_rules! render {
    ($t:expr, $s:expr $(,)?) => { {
        let mut renderer = crate::renderers::AsciiRenderer::default();
        <crate::renderers::AsciiRenderer as crate::render::Renderer>::draw_all(&mut renderer, $t, $s);
        renderer.line
    } };

    ($e:expr $(,)?) => { render!($e.tree(), $e.selected()) };
}

macro_rules! commit {
    ($e:expr, $($t:expr),+ $(,)?) => { $( $e.commit_token($t); )+ };
}

macro_rules! nav {
    ($e:expr, $($i:ident),+ $(,)?) => { $( $e.navigate(crate::nav::Intent::$i); )+ };
}

/// ```text
/// x + (▢ + [y])
/// ```
pub fn nested_expression() -> crate::Editor {
    let mut editor = crate::Editor::new();
    commit!(editor, "/add");
    nav!(editor, Down);
    commit!(editor, "x");
    nav!(editor, Right);
    commit!(editor, "/add");
    nav!(editor, Down, Right);
    commit!(editor, "y");
    editor
}

/// A tree whose root is an addition of two placeholders.
pub fn addition_tree() -> crate::SymbolTree {
    let mut tree = crate::SymbolTree::new();
    let root = tree.root();
    let addition = tree.build(None, crate::Symbol::Compound(crate::Operator::Addition)).unwrap();
    tree.replace(root, addition).unwrap();
    tree
}
