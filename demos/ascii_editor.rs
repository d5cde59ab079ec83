// This example shows how to drive an smbl editing session from a terminal: raw keys are decoded
// into tokens and navigation intents, and the tree is redrawn after every key.
//
// This example doesn't implement a renderer - we're using the `AsciiRenderer` built into smbl.

// Enforce `examples` feature is passed ------------------------------------------------------------
#[cfg(not(feature = "examples"))]
fn main() {
    println!("you must enable the `examples` feature to run examples.");
}
// -------------------------------------------------------------------------------------------------

#[cfg(feature = "examples")]
mod ascii_editor {
    use std::error::Error;
    use std::io::{Write, stdin, stdout};

    use termion::event::Key;
    use termion::input::TermRead;
    use termion::raw::IntoRawMode;

    use smbl::{Editor, Intent, renderers::AsciiRenderer, render::Renderer};

    pub fn main() -> Result<(), Box<dyn Error>> {
        // Terminal setup using termion
        let stdin = stdin();
        let mut stdout = stdout().into_raw_mode()?;

        // An `Editor` holds everything about the session: the symbol tree, the selection, and the
        // latest status message. It never sees raw keys - it's up to us to decide which keys mean
        // which intents.
        let mut editor = Editor::new();
        let mut renderer = AsciiRenderer::default();
        let mut input = String::new();

        draw(&mut stdout, &editor, &mut renderer, &input)?;

        for k in stdin.keys() {
            match k? {
                Key::Ctrl('c') => break,
                Key::Char('q') if input.is_empty() => break,

                Key::Char('\n') => {
                    editor.commit_token(&input);
                    input.clear();
                },
                Key::Char('\t') => { editor.navigate(Intent::FocusRoot); },
                Key::Char(c) => input.push(c),
                Key::Backspace => { input.pop(); },
                Key::Esc => editor.deselect(),

                Key::Left => { editor.navigate(Intent::Left); },
                Key::Right => { editor.navigate(Intent::Right); },
                Key::Up => { editor.navigate(Intent::Up); },
                Key::Down => { editor.navigate(Intent::Down); },

                _ => (),
            }

            draw(&mut stdout, &editor, &mut renderer, &input)?;
        }

        Ok(())
    }

    fn draw(
        stdout: &mut impl Write,
        editor: &Editor,
        renderer: &mut AsciiRenderer,
        input: &str,
    ) -> Result<(), Box<dyn Error>> {
        write!(stdout, "{}{}", termion::cursor::Goto(1, 1), termion::clear::All)?;

        renderer.draw_all(editor.tree(), editor.selected());
        write!(stdout, "{}\r\n", renderer.line)?;
        write!(stdout, "\r\n===================================\r\n")?;

        // A terminal isn't HTML, so the message can be printed as it is
        write!(stdout, "{}\r\n", editor.message())?;
        write!(stdout, "> {}", input)?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(feature = "examples")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    ascii_editor::main()
}
