//! Ordered normalization pipeline for abstract text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{instrument, trace};

use super::hyphen::normalize_hyphens;
use super::resources::{LinguisticResources, ensure_ready};

/// HTML line-break artifact left in abstracts by the source export.
pub const LINE_BREAK_MARKUP: &str = "&lt;br/&gt;";

#[allow(clippy::expect_used)]
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S*").expect("URL regex is valid")); // Static pattern, safe to panic

#[allow(clippy::expect_used)]
static WEBSITE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"www\S*").expect("website regex is valid")); // Static pattern, safe to panic

/// Anything that is not a word character, whitespace or hyphen.
#[allow(clippy::expect_used)]
static PUNCTUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("punctuation regex is valid")); // Static pattern, safe to panic

#[allow(clippy::expect_used)]
static HYPHEN_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("hyphen run regex is valid")); // Static pattern, safe to panic

/// Cleaning configuration.
///
/// One immutable value drives both whether abstracts are cleaned at all and
/// how. Defaults: cleaning enabled, no lemmatization, hyphen runs collapsed,
/// `www` sites stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CleanOptions {
    /// Return cleaned text (`false` yields abstracts exactly as stored).
    pub enabled: bool,
    /// Replace each surviving token with its lemma.
    pub lemmatize: bool,
    /// Collapse `--`, `---`, ... into a single hyphen before tokenizing.
    pub collapse_hyphen_runs: bool,
    /// Strip `www...` runs in addition to `http...` runs.
    pub strip_websites: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            lemmatize: false,
            collapse_hyphen_runs: true,
            strip_websites: true,
        }
    }
}

impl CleanOptions {
    /// Options that leave abstracts untouched.
    #[must_use]
    pub fn raw() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_lemmatize(mut self, lemmatize: bool) -> Self {
        self.lemmatize = lemmatize;
        self
    }

    #[must_use]
    pub fn with_collapse_hyphen_runs(mut self, collapse: bool) -> Self {
        self.collapse_hyphen_runs = collapse;
        self
    }

    #[must_use]
    pub fn with_strip_websites(mut self, strip: bool) -> Self {
        self.strip_websites = strip;
        self
    }

    /// Builds the cleaner these options describe, or `None` when cleaning is
    /// disabled.
    #[must_use]
    pub fn build(self) -> Option<AbstractCleaner> {
        self.enabled.then(|| AbstractCleaner::new(self))
    }
}

/// Deterministic string-to-string abstract normalizer.
///
/// The pipeline order is load-bearing (stop words are matched only after
/// lowercasing, hyphens are resolved only after punctuation is gone):
///
/// 1. lowercase
/// 2. drop every `&lt;br/&gt;`
/// 3. drop `http...` runs
/// 4. drop `www...` runs (when `strip_websites`)
/// 5. drop everything but word characters, whitespace and `-`
/// 6. collapse hyphen runs (when `collapse_hyphen_runs`)
/// 7. tokenize on whitespace
/// 8. resolve hyphens per token, rejoin, re-tokenize
/// 9. keep alphanumeric tokens only
/// 10. drop English stop words
/// 11. lemmatize (when `lemmatize`)
/// 12. join with single spaces
#[derive(Debug, Clone)]
pub struct AbstractCleaner {
    options: CleanOptions,
    resources: &'static LinguisticResources,
}

impl AbstractCleaner {
    /// Creates a cleaner, loading the shared linguistic resources on first use.
    #[must_use]
    pub fn new(options: CleanOptions) -> Self {
        Self {
            options,
            resources: ensure_ready(),
        }
    }

    /// Cleans one abstract. The result may be empty.
    #[must_use]
    #[instrument(level = "trace", skip_all, fields(input_len = text.len()))]
    pub fn clean(&self, text: &str) -> String {
        let text = self.strip_markup(text);
        let tokens = self.tokens(&text);
        trace!(tokens = tokens.len(), "abstract cleaned");
        tokens.join(" ")
    }

    /// Steps 1-6: character-level normalization.
    fn strip_markup(&self, text: &str) -> String {
        let mut text = self.strip_links(&text.to_lowercase().replace(LINE_BREAK_MARKUP, ""));
        text = PUNCTUATION_PATTERN.replace_all(&text, "").into_owned();
        if self.options.collapse_hyphen_runs {
            text = HYPHEN_RUN_PATTERN.replace_all(&text, "-").into_owned();
        }
        text
    }

    fn strip_links(&self, text: &str) -> String {
        let text = URL_PATTERN.replace_all(text, "");
        if self.options.strip_websites {
            WEBSITE_PATTERN.replace_all(&text, "").into_owned()
        } else {
            text.into_owned()
        }
    }

    /// Steps 7-11: token-level filtering.
    fn tokens(&self, text: &str) -> Vec<String> {
        let mut rejoined = tokenize(text)
            .map(normalize_hyphens)
            .collect::<Vec<_>>()
            .join(" ");
        // Uncollapsed runs leave empty fragments that glue neighbours back
        // into `www`/`http` runs.
        if !self.options.collapse_hyphen_runs {
            rejoined = self.strip_links(&rejoined);
        }

        let kept = tokenize(&rejoined)
            .filter(|token| is_alphanumeric(token))
            .filter(|token| !self.resources.is_stop_word(token));

        if self.options.lemmatize {
            let lemmatizer = self.resources.lemmatizer();
            kept.map(|token| lemmatizer.lemmatize(token).into_owned())
                .collect()
        } else {
            kept.map(str::to_string).collect()
        }
    }
}

/// Splits already-stripped text into word tokens.
///
/// After punctuation removal only word characters, whitespace and hyphens
/// remain, so English word boundaries coincide with whitespace.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
