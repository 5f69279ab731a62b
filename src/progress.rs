//! Progress bar for passes over the record directory.

use std::io::{self, IsTerminal};

use indicatif::{ProgressBar, ProgressStyle};

fn is_dumb_terminal() -> bool {
    std::env::var("TERM")
        .map(|value| value.eq_ignore_ascii_case("dumb"))
        .unwrap_or(false)
}

pub(crate) fn should_show_progress(
    stderr_is_terminal: bool,
    quiet: bool,
    dumb_terminal: bool,
) -> bool {
    stderr_is_terminal && !quiet && !dumb_terminal
}

/// Optional progress bar, hidden when output is not an interactive terminal.
pub(crate) struct ScanProgress {
    bar: Option<ProgressBar>,
}

impl ScanProgress {
    pub(crate) fn new(quiet: bool, message: &'static str) -> Self {
        let enabled = should_show_progress(io::stderr().is_terminal(), quiet, is_dumb_terminal());
        Self::with_enabled(enabled, message)
    }

    fn with_enabled(enabled: bool, message: &'static str) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(0);
            bar.set_style(
                ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar.set_message(message);
            bar
        });
        Self { bar }
    }

    /// Records that `done` of `total` records have been handled.
    pub(crate) fn update(&self, done: usize, total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        }
    }

    pub(crate) fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    #[cfg(test)]
    fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}
