//! Output sinks
//!
//! - `columns` - tab-aligned column writer
//! - `sink` - the per-mode destination wrapping it

mod columns;
mod sink;

pub use columns::{ColumnWriter, display_width};
pub use sink::{BASIC_PADDING, OutputSink, SHORT_PADDING};
