//! One invocation of the viewer
//!
//! A [`Session`] owns the theme and the output sink for the whole run,
//! dispatches each path argument to the visitor and flushes the sink before
//! returning, whether or not writing succeeded.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, warn};

use crate::output::OutputSink;
use crate::render::ViewMode;
use crate::theme::Theme;
use crate::walk::{TraversalConfig, VisitStats, Visitor};

/// Everything chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: ViewMode,
    pub use_color: bool,
    pub walk: TraversalConfig,
}

pub struct Session<W: Write> {
    config: SessionConfig,
    theme: Theme,
    sink: OutputSink<W>,
}

impl<W: Write> Session<W> {
    pub fn new(config: SessionConfig, writer: W) -> Self {
        Self {
            config,
            theme: Theme::new(config.use_color),
            sink: OutputSink::for_mode(config.mode, writer),
        }
    }

    /// Show every path in `paths`, or the current directory when empty.
    ///
    /// Per-path failures are reported inline and do not stop the run; only
    /// errors writing the output are returned.
    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> io::Result<VisitStats> {
        let result = self.visit_all(paths);
        let flushed = self.sink.flush();
        let stats = result?;
        flushed?;
        debug!(
            "rendered {} torrent(s), {} error(s)",
            stats.rendered, stats.failed
        );
        Ok(stats)
    }

    fn visit_all<P: AsRef<Path>>(&mut self, paths: &[P]) -> io::Result<VisitStats> {
        let mut visitor = Visitor::new(
            self.config.walk,
            self.config.mode,
            &self.theme,
            &mut self.sink,
        );

        if paths.is_empty() {
            visitor.visit_dir(Path::new("."))?;
            return Ok(visitor.stats());
        }

        for path in paths {
            let path = path.as_ref();
            match fs::metadata(path) {
                Ok(meta) if meta.is_dir() => visitor.visit_dir(path)?,
                Ok(_) => visitor.visit_file(path)?,
                Err(err) => {
                    warn!("cannot access {}: {}", path.display(), err);
                    visitor.report_error(path.display(), err)?;
                }
            }
        }
        Ok(visitor.stats())
    }
}
