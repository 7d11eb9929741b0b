//! High-level operations.
//!
//! Rewriting a line, pinning a file, and pinning a workflow directory.

pub mod pin;
pub mod process;
pub mod rewrite;

pub use pin::{pin_workflows, FileFailure, PinOptions, PinReport};
pub use process::{pin_content, pin_line, process_file, Output, ProcessedContent};
pub use rewrite::rewrite_line;
