//! CLI command handlers.

mod config;
mod labels;
mod sample;
mod show;
mod summary;
mod words;

pub use config::run_config_show_command;
pub use labels::run_labels_command;
pub use sample::run_sample_command;
pub use show::run_show_command;
pub use summary::run_summary_command;
pub use words::run_words_command;

use abstracts_core::{CorpusDataset, CorpusError};
use anyhow::{Context, Result};
use tracing::warn;

use crate::app_config::{Settings, VerbositySetting};
use crate::progress::ScanProgress;

fn is_quiet(settings: &Settings) -> bool {
    settings.verbosity == VerbositySetting::Quiet
}

/// Opens the configured corpus, showing a progress bar while records are checked.
fn open_corpus(settings: &Settings) -> Result<CorpusDataset> {
    let progress = ScanProgress::new(is_quiet(settings), "Checking records");
    let corpus = CorpusDataset::open_with_progress(
        &settings.dataset_dir,
        settings.corpus_options(),
        |done, total| progress.update(done, total),
    )
    .with_context(|| format!("Cannot open corpus at '{}'", settings.dataset_dir.display()));
    progress.finish();
    corpus
}

/// Visits every abstract in index order, logging and skipping records that
/// became unreadable since the corpus was opened.
fn for_each_abstract(
    corpus: &CorpusDataset,
    settings: &Settings,
    message: &'static str,
    mut visit: impl FnMut(usize, String),
) {
    let progress = ScanProgress::new(is_quiet(settings), message);
    let total = corpus.len();
    for (index, text) in corpus.iter().enumerate() {
        match text {
            Ok(text) => visit(index, text),
            Err(e) => log_skipped(corpus, index, &e),
        }
        progress.update(index + 1, total);
    }
    progress.finish();
}

fn log_skipped(corpus: &CorpusDataset, index: usize, error: &CorpusError) {
    warn!(
        index,
        file = corpus.file_name(index).unwrap_or("<unknown>"),
        error = %error,
        "Skipping record"
    );
}
