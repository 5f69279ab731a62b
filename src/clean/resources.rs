//! Process-wide linguistic resources shared by every cleaner.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{LANGUAGE, get};
use tracing::debug;

use super::lemma::Lemmatizer;

static RESOURCES: LazyLock<LinguisticResources> = LazyLock::new(LinguisticResources::load);

/// Stop-word set and lemmatizer tables.
///
/// Built at most once per process and read-only afterwards.
#[derive(Debug)]
pub struct LinguisticResources {
    stop_words: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl LinguisticResources {
    fn load() -> Self {
        let stop_words: HashSet<String> = get(LANGUAGE::English)
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();
        let lemmatizer = Lemmatizer::new();
        debug!(
            stop_words = stop_words.len(),
            irregular_forms = lemmatizer.irregular_count(),
            "Linguistic resources loaded"
        );
        Self {
            stop_words,
            lemmatizer,
        }
    }

    #[must_use]
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    #[must_use]
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    #[must_use]
    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}

/// Makes sure the stop-word set and lemmatizer are loaded.
///
/// Idempotent: the first call builds the resources, later calls return the
/// same shared instance. Cleaners call this on construction; binaries may
/// call it once at startup to pay the cost up front.
pub fn ensure_ready() -> &'static LinguisticResources {
    &RESOURCES
}
