//! Discovery of torrent files
//!
//! [`Visitor`] decodes and renders single files and walks directories in
//! lexical order, applying the recursion policy from [`TraversalConfig`].

mod config;
mod visitor;

pub use config::{EntryAction, TORRENT_EXTENSION, TraversalConfig};
pub use visitor::{Visitor, VisitStats};
