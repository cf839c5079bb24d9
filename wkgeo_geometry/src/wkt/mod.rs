//! Well-known text: tokenizer, recursive descent parser and canonical formatter.

mod formatter;
mod parser;
mod tokenizer;

pub use formatter::*;
pub use parser::*;
pub use tokenizer::*;
