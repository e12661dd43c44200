//! Console progress reporting
//!
//! Seeding reports through the [`Ui`] trait:
//! - Current stage (Loading, then one stage per table group, then Complete)
//! - Per-table progress (rows written out of rows loaded)
//! - Free-form log lines

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, Write};

use crate::schema::Stage;

/// Phases shown while a seed run progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Seeding(Stage),
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Loading => write!(f, "Loading fixtures"),
            Phase::Seeding(stage) => write!(f, "Seeding {}", stage),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for UI implementations - allows both progress bars and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn start_table(&mut self, table: &str, total: u64);
    fn set_progress(&mut self, current: u64);
    fn finish_table(&mut self, table: &str, count: u64);
    fn log(&mut self, message: impl Into<String>);
}

/// Progress bars on stderr, one per table
pub struct ProgressUi {
    multi: MultiProgress,
    style: ProgressStyle,
    current: Option<ProgressBar>,
}

impl ProgressUi {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{msg:32} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");

        Self {
            multi: MultiProgress::new(),
            style,
            current: None,
        }
    }

    /// Writer factory for the log subscriber. Lines are written with the bars
    /// suspended so they never interleave with a redraw.
    pub fn log_writer(&self) -> impl Fn() -> SuspendWriter + Send + Sync + 'static {
        let multi = self.multi.clone();
        move || SuspendWriter {
            multi: multi.clone(),
        }
    }
}

/// Stderr writer that hides the progress bars around each write
pub struct SuspendWriter {
    multi: MultiProgress,
}

impl Write for SuspendWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.multi.suspend(|| io::stderr().flush())
    }
}

impl Default for ProgressUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for ProgressUi {
    fn set_phase(&mut self, phase: Phase) {
        tracing::info!("{}", phase);
    }

    fn start_table(&mut self, table: &str, total: u64) {
        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(self.style.clone());
        pb.set_message(table.to_string());
        self.current = Some(pb);
    }

    fn set_progress(&mut self, current: u64) {
        if let Some(pb) = &self.current {
            pb.set_position(current);
        }
    }

    fn finish_table(&mut self, table: &str, count: u64) {
        if let Some(pb) = self.current.take() {
            pb.set_position(count);
            pb.finish_with_message(format!("{}: {} rows", table, count));
        }
    }

    fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.multi.println(&message).ok();
    }
}

/// Silent UI implementation for testing and non-interactive use.
/// Records the phases it was shown.
#[derive(Debug, Default)]
pub struct SilentUi {
    pub phases: Vec<Phase>,
}

impl SilentUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }
    fn start_table(&mut self, _table: &str, _total: u64) {}
    fn set_progress(&mut self, _current: u64) {}
    fn finish_table(&mut self, _table: &str, _count: u64) {}
    fn log(&mut self, _message: impl Into<String>) {}
}
