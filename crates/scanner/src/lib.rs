//! WGSL external scanner.
//!
//! Recognizes the tokens that the WGSL grammar cannot express with regular expressions: nested
//! `/* ... */` block comments, and `<` / `>` as either operators or template argument list
//! delimiters. See [`Scanner`] for the entry point, and [`driver`] for a grammar-free token
//! stream built on top of it.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

mod char_info;
pub use char_info::{is_id_continue, is_id_start, is_ident, is_whitespace};

mod unicode;

mod lexer;
pub use lexer::{Input, Lexer};

mod input;
pub use input::StrInput;

mod bit_queue;
pub use bit_queue::BitQueue;

mod error;
pub use error::StateError;

mod token;
pub use token::{Token, ValidSymbols};

mod template;

mod scanner;
pub use scanner::{SERIALIZATION_BUFFER_SIZE, SERIALIZED_STATE_LEN, Scanner, State};

pub mod driver;

/// A Unicode code point, as reported by the host's lexer.
pub type CodePoint = u32;

/// The code point reported at the end of input.
pub const EOF: CodePoint = 0;
