//! Traversal policy

use std::path::Path;

/// Extension of the files picked up while walking a directory.
pub const TORRENT_EXTENSION: &str = ".torrent";

/// Configuration for directory traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Descend into subdirectories and show paths relative to the argument
    /// instead of bare file names.
    pub recursive: bool,
}

/// What to do with an entry found inside a directory being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Descend,
    SkipSubtree,
    Visit,
    Ignore,
}

impl TraversalConfig {
    /// Decide what to do with `path`, an entry below the walk root.
    pub fn classify(&self, path: &Path, is_dir: bool) -> EntryAction {
        if is_dir {
            if self.recursive {
                EntryAction::Descend
            } else {
                EntryAction::SkipSubtree
            }
        } else if is_torrent_file(path) {
            EntryAction::Visit
        } else {
            EntryAction::Ignore
        }
    }
}

/// Case-sensitive match on the final extension of the file name.
pub fn is_torrent_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(TORRENT_EXTENSION.as_bytes()))
}
