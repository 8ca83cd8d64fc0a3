//! CLI command handlers, one per file.

mod checksum;
mod fetch;
mod placeholders;

pub use checksum::run_checksum;
pub use fetch::run_fetch;
pub use placeholders::run_placeholders;

#[cfg(test)]
pub(crate) use fetch::{event_line, summary_lines};
#[cfg(test)]
pub(crate) use placeholders::created_line;
