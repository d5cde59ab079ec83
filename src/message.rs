//! Status messages shown to the user.
//!
//! Message text can contain whatever the user typed, so it must be treated as untrusted by anything
//! which displays it as markup. [Message::escaped] provides the HTML-safe form.

use alloc::string::String;
use core::fmt;

/// Escapes the characters `& < > " ' /` as HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            '/' => result.push_str("&#x2F;"),
            _ => result.push(c),
        }
    }
    result
}

/// A single status message.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text of the message.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text of the message, escaped for inclusion in HTML.
    pub fn escaped(&self) -> String {
        escape_html(&self.text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
