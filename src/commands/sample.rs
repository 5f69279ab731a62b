//! Sample command handler: print randomly chosen abstracts.

use anyhow::Result;
use tracing::{debug, info};

use super::{log_skipped, open_corpus};
use crate::app_config::Settings;

pub fn run_sample_command(settings: &Settings, count: usize, seed: Option<u64>) -> Result<()> {
    let corpus = open_corpus(settings)?;
    let seed = seed.unwrap_or_else(rand::random);
    debug!(seed, count, "Sampling abstracts");

    if corpus.is_empty() {
        info!("Corpus is empty, nothing to sample");
        return Ok(());
    }

    for index in corpus.sample(count, seed) {
        match corpus.get(index) {
            Ok(text) => {
                println!(
                    "[{index}] {}",
                    corpus.file_name(index).unwrap_or("<unknown>")
                );
                println!("{text}");
                println!();
            }
            Err(e) => log_skipped(&corpus, index, &e),
        }
    }

    Ok(())
}
