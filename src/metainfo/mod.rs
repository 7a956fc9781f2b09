//! Torrent metainfo decoding.
//!
//! [`decode`] reads a `.torrent` file and extracts the fields the renderers
//! display. Anything else in the file (piece hashes, private flag, v2 file
//! trees) is ignored.

mod error;
mod torrent;

pub use error::MetainfoError;
pub use torrent::{FileEntry, MetaInfo, decode};
