//! Words command handler: most frequent tokens across the corpus.

use abstracts_core::WordFrequencies;
use anyhow::Result;

use super::{for_each_abstract, open_corpus};
use crate::app_config::Settings;

pub fn run_words_command(settings: &Settings, top: usize) -> Result<()> {
    let corpus = open_corpus(settings)?;

    let mut words = WordFrequencies::default();
    for_each_abstract(&corpus, settings, "Counting words", |_, text| {
        words.add(&text);
    });

    println!("tokens = {}, distinct = {}", words.total(), words.distinct());
    for (word, count) in words.top(top) {
        println!("{count:>8}  {word}");
    }

    Ok(())
}
