//! Show command handler: print one record by index.

use anyhow::{Context, Result};

use super::open_corpus;
use crate::app_config::Settings;

pub fn run_show_command(
    settings: &Settings,
    index: usize,
    json: bool,
    metadata: bool,
) -> Result<()> {
    let corpus = open_corpus(settings)?;
    let file_name = corpus.file_name(index).unwrap_or("<none>").to_string();

    if json {
        let award = corpus
            .award(index)
            .with_context(|| format!("Cannot read record {index} ({file_name})"))?;
        let rendered =
            serde_json::to_string_pretty(&award).context("Failed to render award as JSON")?;
        println!("{rendered}");
        return Ok(());
    }

    let text = corpus
        .get(index)
        .with_context(|| format!("Cannot read record {index} ({file_name})"))?;

    if metadata {
        let fields = corpus
            .metadata(index)
            .with_context(|| format!("Cannot read metadata of record {index} ({file_name})"))?;
        println!("file = {file_name}");
        println!("award_id = {}", fields.award_id.as_deref().unwrap_or(""));
        println!("title = {}", fields.title.as_deref().unwrap_or(""));
        println!("directorate = {}", fields.directorate.as_deref().unwrap_or(""));
        println!("program = {}", fields.program.as_deref().unwrap_or(""));
        println!();
    }

    println!("{text}");
    Ok(())
}
