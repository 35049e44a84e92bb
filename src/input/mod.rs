//! Prompt input from a flag, a file, or stdin.

mod reader;

pub use reader::{InputReader, MAX_INPUT_SIZE};
