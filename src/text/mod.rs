//! The text engine: a line/column-tracking scanner (`StringReader`) paired with a
//! format-token-driven accumulator (`StringWriter`). Both speak the mini-language parsed in
//! [`crate::format`].

mod reader;
mod writer;

pub use reader::StringReader;
pub use writer::{Arg, StringWriter};
