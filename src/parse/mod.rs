//! HTML text extraction.
//!
//! A single pass classifies the response body into text and tag tokens; a
//! second pass keeps the text found between `<body>` and `</body>`. There is no
//! DOM, no entity decoding and no CSS: markup is simply stripped.

mod html;

// Re-export public API
pub use html::{extract_body_text, tokenize, visible_text, Token};
