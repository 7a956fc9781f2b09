//! torview - inspect .torrent metadata files from the terminal

pub mod bencode;
pub mod metainfo;
pub mod output;
pub mod render;
pub mod session;
pub mod theme;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use metainfo::{FileEntry, MetaInfo, MetainfoError};
pub use output::{ColumnWriter, OutputSink};
pub use render::ViewMode;
pub use session::{Session, SessionConfig};
pub use theme::Theme;
pub use walk::{TraversalConfig, VisitStats, Visitor};
