pub mod line_format;
pub mod message;

pub use line_format::LineFormat;
pub use message::{MessageRecord, TimeEntry};
