//! File and directory visitor

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::metainfo;
use crate::render::{self, ViewMode};
use crate::theme::Theme;

use super::config::{EntryAction, TraversalConfig};

/// Counts of what a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitStats {
    /// Torrents decoded and rendered.
    pub rendered: usize,
    /// Paths reported with an error line.
    pub failed: usize,
}

/// Decodes and renders torrent files into an output sink.
///
/// Only errors writing to the sink are returned; unreadable or undecodable
/// files are reported inline and counted in [`VisitStats::failed`].
pub struct Visitor<'a> {
    config: TraversalConfig,
    mode: ViewMode,
    theme: &'a Theme,
    out: &'a mut dyn Write,
    stats: VisitStats,
}

impl<'a> Visitor<'a> {
    pub fn new(
        config: TraversalConfig,
        mode: ViewMode,
        theme: &'a Theme,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            config,
            mode,
            theme,
            out,
            stats: VisitStats::default(),
        }
    }

    pub fn stats(&self) -> VisitStats {
        self.stats
    }

    /// Write the uniform error line for `name`.
    pub fn report_error(
        &mut self,
        name: impl std::fmt::Display,
        err: impl std::fmt::Display,
    ) -> io::Result<()> {
        self.stats.failed += 1;
        render::render_error(self.out, self.theme, name, err)
    }

    /// Decode `path` and render it, or report why it could not be decoded.
    pub fn visit_file(&mut self, path: &Path) -> io::Result<()> {
        let mi = match metainfo::decode(path) {
            Ok(mi) => mi,
            Err(err) => return self.report_error(relative_to_cwd(path).display(), err),
        };

        let name = self.display_name(path);
        render::render(self.mode, self.out, self.theme, &name.to_string_lossy(), &mi)?;
        self.stats.rendered += 1;
        Ok(())
    }

    /// Walk the directory `root`, visiting every torrent file found.
    pub fn visit_dir(&mut self, root: &Path) -> io::Result<()> {
        self.walk(root)
    }

    fn walk(&mut self, dir: &Path) -> io::Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("cannot read directory {}: {}", dir.display(), err);
                return Ok(());
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("cannot read entry in {}: {}", dir.display(), err);
                    None
                }
            })
            .collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            // Symlinks are not followed into directories, which rules out cycles.
            let is_dir = match entry.file_type() {
                Ok(file_type) => file_type.is_dir(),
                Err(err) => {
                    debug!("cannot stat {}: {}", path.display(), err);
                    continue;
                }
            };

            match self.config.classify(&path, is_dir) {
                EntryAction::Descend => self.walk(&path)?,
                EntryAction::SkipSubtree => debug!("not descending into {}", path.display()),
                EntryAction::Visit => self.visit_file(&path)?,
                EntryAction::Ignore => {}
            }
        }
        Ok(())
    }

    /// The bare file name when not recursive, otherwise the path as reached
    /// (without a leading `./`).
    fn display_name(&self, path: &Path) -> PathBuf {
        if self.config.recursive {
            relative_to_cwd(path).to_path_buf()
        } else {
            path.file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| path.to_path_buf())
        }
    }
}

/// Drop the leading `./` a walk of the current directory adds.
fn relative_to_cwd(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
