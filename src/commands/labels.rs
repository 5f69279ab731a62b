//! Label command handler: record counts per program or directorate.

use abstracts_core::{LabelKind, LabelTally};
use anyhow::Result;

use super::{is_quiet, log_skipped, open_corpus};
use crate::app_config::Settings;
use crate::progress::ScanProgress;

pub fn run_labels_command(settings: &Settings, kind: LabelKind) -> Result<()> {
    let corpus = open_corpus(settings)?;

    let progress = ScanProgress::new(is_quiet(settings), "Reading labels");
    let mut tally = LabelTally::default();
    for index in 0..corpus.len() {
        match corpus.metadata(index) {
            Ok(metadata) => tally.add(kind.of(&metadata)),
            Err(e) => log_skipped(&corpus, index, &e),
        }
        progress.update(index + 1, corpus.len());
    }
    progress.finish();

    println!(
        "{}s = {}, records = {}",
        kind.as_str(),
        tally.distinct(),
        tally.total()
    );
    for (label, count) in tally.ranked() {
        println!("{count:>8}  {label}");
    }
    if tally.unlabelled > 0 {
        println!("{:>8}  <no {}>", tally.unlabelled, kind.as_str());
    }

    Ok(())
}
