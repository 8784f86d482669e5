//! Markup tokenizer and body text extraction.

use crate::config::BodyMatch;

/// A classified run of characters from an HTML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text between tags
    Text {
        /// The text, exactly as it appeared
        content: String,
    },
    /// Everything between `<` and `>`; closing tags keep their leading `/`
    Tag {
        /// Tag contents, e.g. `body`, `/body` or `a href="x"`
        name: String,
    },
}

/// Splits `body` into text and tag tokens, in order of appearance.
///
/// A `<` starts a tag (flushing any pending text), a `>` ends one. Every `>`
/// emits a tag, even an empty one or a stray `>` outside any tag. Text left
/// inside an unterminated tag at the end of input is dropped.
pub fn tokenize(body: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut in_tag = false;

    for c in body.chars() {
        match c {
            '<' => {
                // A second `<` inside a tag restarts it; the partial tag is dropped
                if !in_tag && !buffer.is_empty() {
                    tokens.push(Token::Text {
                        content: std::mem::take(&mut buffer),
                    });
                }
                in_tag = true;
                buffer.clear();
            }
            '>' => {
                in_tag = false;
                tokens.push(Token::Tag {
                    name: std::mem::take(&mut buffer),
                });
            }
            _ => buffer.push(c),
        }
    }

    if !in_tag && !buffer.is_empty() {
        tokens.push(Token::Text { content: buffer });
    }

    tokens
}

impl BodyMatch {
    /// Whether a tag with this name opens the body region.
    pub fn opens_body(self, name: &str) -> bool {
        match self {
            BodyMatch::Exact => name == "body",
            BodyMatch::AllowAttributes => match name.strip_prefix("body") {
                Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
                None => false,
            },
        }
    }
}

/// Concatenates the text tokens that sit between a body-open and `/body` tag.
///
/// The body flag is simply overwritten by each matching tag, so nested or
/// repeated `<body>` tags get no special treatment. Entities are not decoded.
pub fn extract_body_text(tokens: &[Token], body_match: BodyMatch) -> String {
    let mut in_body = false;
    let mut text = String::new();

    for token in tokens {
        match token {
            Token::Text { content } => {
                if in_body {
                    text.push_str(content);
                }
            }
            Token::Tag { name } if name == "/body" => in_body = false,
            Token::Tag { name } if body_match.opens_body(name) => in_body = true,
            Token::Tag { .. } => {}
        }
    }

    text
}

/// Tokenizes `body` and returns its visible body text.
pub fn visible_text(body: &str, body_match: BodyMatch) -> String {
    extract_body_text(&tokenize(body), body_match)
}
