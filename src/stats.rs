//! Descriptive statistics over award records and abstracts.
//!
//! These are the numbers one looks at before fitting a topic model: which
//! fields the records actually carry, how programs and directorates are
//! distributed, which words dominate, and how long abstracts are.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::corpus::{CorpusError, list_candidates};
use crate::record::{self, AwardLookup, AwardMetadata, Node, extract_award};

/// Default number of histogram bins for [`LengthSummary`].
pub const DEFAULT_BINS: usize = 20;

/// Sorts counts by descending count, then ascending key.
fn ranked(counts: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(key, count)| (key.as_str(), *count))
        .collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// How many award records carry each top-level award field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCensus {
    /// Files that matched the extension
    pub files: usize,
    /// Parsed files with no `rootTag`/`Award` section
    pub without_award: usize,
    /// Files that could not be read or parsed
    pub unreadable: usize,
    counts: HashMap<String, usize>,
}

impl KeyCensus {
    /// Parses every matching file in `dir` and counts award fields.
    ///
    /// Unlike the corpus, the census looks at every file, including those
    /// without an abstract.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::ListDir`] when the directory cannot be listed.
    #[instrument(skip_all, fields(dir = %dir.display(), extension = %extension))]
    pub fn scan(
        dir: &Path,
        extension: &str,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<Self, CorpusError> {
        let names = list_candidates(dir, extension)?;
        let total = names.len();
        let mut census = Self::default();

        for (done, name) in names.iter().enumerate() {
            match record::parse(&dir.join(name)) {
                Ok(document) => census.add_document(&document),
                Err(e) => {
                    warn!(file = %name, error = %e, "Skipping unreadable record");
                    census.add_unreadable();
                }
            }
            progress(done + 1, total);
        }

        debug!(files = census.files, keys = census.counts.len(), "Key census complete");
        Ok(census)
    }

    /// Counts the award fields of one parsed document.
    pub fn add_document(&mut self, document: &Node) {
        self.files += 1;
        match extract_award(document) {
            AwardLookup::Found(award) => {
                for key in award.as_map().into_iter().flat_map(|map| map.keys()) {
                    *self.counts.entry(key.to_string()).or_default() += 1;
                }
            }
            AwardLookup::Absent(section) => {
                debug!(%section, "Document has no award");
                self.without_award += 1;
            }
        }
    }

    pub fn add_unreadable(&mut self) {
        self.files += 1;
        self.unreadable += 1;
    }

    /// Number of award records carrying `key`.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// All keys, most frequent first.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        ranked(&self.counts)
    }
}

/// Which categorical label to tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// `ProgramElement.Text`
    Program,
    /// `Organization.Directorate.LongName`
    Directorate,
}

impl LabelKind {
    #[must_use]
    pub fn of(self, metadata: &AwardMetadata) -> Option<&str> {
        match self {
            Self::Program => metadata.program.as_deref(),
            Self::Directorate => metadata.directorate.as_deref(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Directorate => "directorate",
        }
    }
}

/// Distribution of one categorical label across records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTally {
    counts: HashMap<String, usize>,
    /// Records without the label
    pub unlabelled: usize,
}

impl LabelTally {
    pub fn add(&mut self, label: Option<&str>) {
        match label {
            Some(label) => *self.counts.entry(label.to_string()).or_default() += 1,
            None => self.unlabelled += 1,
        }
    }

    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct labels seen.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of records added, labelled or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.unlabelled
    }

    /// Labels, most frequent first.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        ranked(&self.counts)
    }
}

impl<'a> FromIterator<Option<&'a str>> for LabelTally {
    fn from_iter<I: IntoIterator<Item = Option<&'a str>>>(iter: I) -> Self {
        let mut tally = Self::default();
        for label in iter {
            tally.add(label);
        }
        tally
    }
}

/// Token frequencies over a set of (cleaned) abstracts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
    total: usize,
}

impl WordFrequencies {
    /// Counts the whitespace-separated tokens of one abstract.
    pub fn add(&mut self, text: &str) {
        for word in text.split_whitespace() {
            *self.counts.entry(word.to_string()).or_default() += 1;
            self.total += 1;
        }
    }

    /// Total tokens counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The `n` most frequent words; ties are ordered alphabetically.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries = ranked(&self.counts);
        entries.truncate(n);
        entries
    }
}

/// One histogram bucket covering `[lower, upper)` (the last bucket is closed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Summary of abstract lengths, in tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub histogram: Vec<Bin>,
}

impl LengthSummary {
    /// Summarizes `lengths` into `bins` equal-width buckets.
    ///
    /// Returns `None` when there is nothing to summarize. When every length
    /// is equal the buckets span one unit centred on that value.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn from_lengths(lengths: &[usize], bins: usize) -> Option<Self> {
        let min = *lengths.iter().min()?;
        let max = *lengths.iter().max()?;
        let bins = bins.max(1);
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        let (lower, upper) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (upper - lower) / bins as f64;

        let mut histogram: Vec<Bin> = (0..bins)
            .map(|i| Bin {
                lower: lower + width * i as f64,
                upper: lower + width * (i + 1) as f64,
                count: 0,
            })
            .collect();
        for &length in lengths {
            let slot = (((length as f64 - lower) / width).floor() as usize).min(bins - 1);
            histogram[slot].count += 1;
        }

        Some(Self {
            count: lengths.len(),
            min,
            max,
            mean,
            histogram,
        })
    }
}

/// Number of whitespace-separated tokens in `text`.
#[must_use]
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::parse_document;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_key_census_counts_award_fields() {
        let mut census = KeyCensus::default();
        for xml in [
            "<rootTag><Award><AwardID>1</AwardID><AbstractNarration>a</AbstractNarration></Award></rootTag>",
            "<rootTag><Award><AwardID>2</AwardID><AbstractNarration/></Award></rootTag>",
            "<rootTag><Other/></rootTag>",
        ] {
            census.add_document(&parse_document(xml).unwrap());
        }

        assert_eq!(census.files, 3);
        assert_eq!(census.without_award, 1);
        assert_eq!(census.count("AwardID"), 2);
        assert_eq!(census.count("AbstractNarration"), 2);
        assert_eq!(census.count("ProgramElement"), 0);
        assert_eq!(
            census.ranked(),
            [("AbstractNarration", 2), ("AwardID", 2)]
        );
    }

    #[test]
    fn test_key_census_scan_counts_unreadable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("1.xml"),
            "<rootTag><Award><AwardID>1</AwardID></Award></rootTag>",
        )
        .unwrap();
        fs::write(dir.path().join("2.xml"), "<rootTag>").unwrap();
        fs::write(dir.path().join("3.txt"), "ignored").unwrap();

        let census = KeyCensus::scan(dir.path(), ".xml", |_, _| {}).unwrap();
        assert_eq!(census.files, 2);
        assert_eq!(census.unreadable, 1);
        assert_eq!(census.count("AwardID"), 1);
    }

    #[test]
    fn test_label_tally_counts_unlabelled() {
        let tally: LabelTally = [
            Some("BIOLOGICAL OCEANOGRAPHY"),
            None,
            Some("POPULATION DYNAMICS"),
            Some("BIOLOGICAL OCEANOGRAPHY"),
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.count("BIOLOGICAL OCEANOGRAPHY"), 2);
        assert_eq!(tally.unlabelled, 1);
        assert_eq!(tally.distinct(), 2);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.ranked()[0], ("BIOLOGICAL OCEANOGRAPHY", 2));
    }

    #[test]
    fn test_label_kind_selects_field() {
        let metadata = AwardMetadata {
            program: Some("BIOLOGICAL OCEANOGRAPHY".to_string()),
            directorate: Some("Directorate For Geosciences".to_string()),
            ..AwardMetadata::default()
        };
        assert_eq!(
            LabelKind::Program.of(&metadata),
            Some("BIOLOGICAL OCEANOGRAPHY")
        );
        assert_eq!(
            LabelKind::Directorate.of(&metadata),
            Some("Directorate For Geosciences")
        );
        assert_eq!(LabelKind::Program.of(&AwardMetadata::default()), None);
    }

    #[test]
    fn test_word_frequencies_top_breaks_ties_alphabetically() {
        let mut words = WordFrequencies::default();
        words.add("kelp synchrony kelp");
        words.add("beach synchrony kelp");
        words.add("");

        assert_eq!(words.total(), 6);
        assert_eq!(words.distinct(), 3);
        assert_eq!(words.top(2), [("kelp", 3), ("synchrony", 2)]);
        assert_eq!(
            words.top(10),
            [("kelp", 3), ("synchrony", 2), ("beach", 1)]
        );
    }

    #[test]
    fn test_length_summary_basic() {
        let summary = LengthSummary::from_lengths(&[0, 5, 10], 2).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, 0);
        assert_eq!(summary.max, 10);
        assert!((summary.mean - 5.0).abs() < f64::EPSILON);
        let counts: Vec<usize> = summary.histogram.iter().map(|bin| bin.count).collect();
        assert_eq!(counts, [1, 2]);
    }

    #[test]
    fn test_length_summary_constant_lengths() {
        let summary = LengthSummary::from_lengths(&[7, 7, 7], DEFAULT_BINS).unwrap();
        assert_eq!(summary.histogram.len(), DEFAULT_BINS);
        assert_eq!(
            summary.histogram.iter().map(|bin| bin.count).sum::<usize>(),
            3
        );
        assert!(summary.histogram[0].lower < 7.0);
        assert!(summary.histogram[DEFAULT_BINS - 1].upper > 7.0);
    }

    #[test]
    fn test_length_summary_empty_is_none() {
        assert!(LengthSummary::from_lengths(&[], DEFAULT_BINS).is_none());
    }

    #[test]
    fn test_token_count() {
        assert_eq!(token_count("kelp  forest\nsynchrony"), 3);
        assert_eq!(token_count(""), 0);
    }
}
