//! Summary command handler: record counts, award field census and abstract lengths.

use abstracts_core::record::ABSTRACT_KEY;
use abstracts_core::stats::token_count;
use abstracts_core::{KeyCensus, LengthSummary};
use anyhow::{Context, Result};

use super::{for_each_abstract, is_quiet, open_corpus};
use crate::app_config::Settings;
use crate::progress::ScanProgress;

const PROGRAM_ELEMENT_KEY: &str = "ProgramElement";

pub fn run_summary_command(settings: &Settings, bins: usize) -> Result<()> {
    let progress = ScanProgress::new(is_quiet(settings), "Counting award fields");
    let census = KeyCensus::scan(&settings.dataset_dir, &settings.extension, |done, total| {
        progress.update(done, total);
    })
    .with_context(|| format!("Cannot scan records in '{}'", settings.dataset_dir.display()));
    progress.finish();
    let census = census?;

    let corpus = open_corpus(settings)?;
    let mut lengths = Vec::with_capacity(corpus.len());
    for_each_abstract(&corpus, settings, "Measuring abstracts", |_, text| {
        lengths.push(token_count(&text));
    });

    println!("dataset_dir = {}", corpus.dir().display());
    println!("files = {}", census.files);
    println!("unreadable = {}", census.unreadable);
    println!("without_award = {}", census.without_award);
    println!("with_abstract = {}", census.count(ABSTRACT_KEY));
    println!("with_program_element = {}", census.count(PROGRAM_ELEMENT_KEY));
    println!("retained = {}", corpus.len());
    println!("excluded = {}", corpus.excluded_count());
    println!("cleaned = {}", corpus.is_cleaning());

    println!();
    println!("award fields:");
    for (key, count) in census.ranked() {
        println!("{count:>8}  {key}");
    }

    println!();
    match LengthSummary::from_lengths(&lengths, bins) {
        Some(summary) => {
            println!(
                "abstract tokens: min = {}, max = {}, mean = {:.1}",
                summary.min, summary.max, summary.mean
            );
            for bin in &summary.histogram {
                println!("{:>10.1} - {:<10.1} {:>8}", bin.lower, bin.upper, bin.count);
            }
        }
        None => println!("abstract tokens: no abstracts"),
    }

    Ok(())
}
