// src/parser/mod.rs

pub mod extract;
pub mod line;
pub mod reader;

pub use extract::{extract_time, try_extract_time};
pub use line::{LineParser, ParsedLine};
pub use reader::{ParsedChat, parse_lines, read_chat_file};
