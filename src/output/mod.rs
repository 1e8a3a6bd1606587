//! Output format writers.

mod audacity;
mod json;
pub mod progress;
mod types;
mod writer;

pub use audacity::AudacityWriter;
pub use json::JsonRangeWriter;
pub use types::ShoutingDocument;
pub use writer::{OutputWriter, write_all};
