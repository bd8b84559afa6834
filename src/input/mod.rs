//! Input text acquisition.

mod reader;

pub use reader::InputReader;
