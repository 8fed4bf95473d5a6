//! Line input from the console, either through interactive prompts or from
//! plain buffered stdin.

mod reader;

pub use reader::{LineSource, PromptLines, StdinLines};
