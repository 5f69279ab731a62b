//! Corpus dataset: a lazy, filtered, index-addressable view over a directory
//! of award records.
//!
//! Construction lists the directory once and drops every record without an
//! abstract. After that the file list is frozen: index `i` always refers to
//! the same file, and each access re-reads that file from disk.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use abstracts_core::corpus::{CorpusDataset, CorpusOptions};
//!
//! let corpus = CorpusDataset::open(Path::new("data/awards"), CorpusOptions::default())?;
//! for (index, text) in corpus.iter().enumerate() {
//!     println!("{index}: {}", text?);
//! }
//! # Ok::<(), abstracts_core::corpus::CorpusError>(())
//! ```

mod error;

pub use error::CorpusError;

use std::fs;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::clean::{AbstractCleaner, CleanOptions};
use crate::record::{self, AwardLookup, AwardMetadata, Node, abstract_text, extract_award};

/// Default record file extension.
pub const DEFAULT_EXTENSION: &str = ".xml";

/// Options for opening a [`CorpusDataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Suffix a file name must end with to be considered (matched literally).
    pub extension: String,
    /// Cleaning applied to abstracts returned by [`CorpusDataset::get`].
    pub clean: CleanOptions,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            clean: CleanOptions::default(),
        }
    }
}

impl CorpusOptions {
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_clean(mut self, clean: CleanOptions) -> Self {
        self.clean = clean;
        self
    }
}

/// Directory-backed collection of award abstracts.
///
/// Holds only file names. Records are parsed on demand and never cached, so
/// the corpus stays small no matter how many records it covers.
#[derive(Debug, Clone)]
pub struct CorpusDataset {
    dir: PathBuf,
    files: Vec<String>,
    candidates: usize,
    cleaner: Option<AbstractCleaner>,
}

impl CorpusDataset {
    /// Lists `dir`, keeps files matching the configured extension and drops
    /// those without an abstract.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::ListDir`] when the directory cannot be listed.
    /// Problems with individual records never fail construction; the record
    /// is logged and excluded.
    pub fn open(dir: &Path, options: CorpusOptions) -> Result<Self, CorpusError> {
        Self::open_with_progress(dir, options, |_, _| {})
    }

    /// Same as [`open`](Self::open), calling `progress(done, total)` after
    /// each candidate file has been checked.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::ListDir`] when the directory cannot be listed.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn open_with_progress(
        dir: &Path,
        options: CorpusOptions,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<Self, CorpusError> {
        let candidates = list_candidates(dir, &options.extension)?;
        let total = candidates.len();

        let mut files = Vec::with_capacity(total);
        for (done, name) in candidates.into_iter().enumerate() {
            match read_abstract(&dir.join(&name)) {
                Ok(_) => files.push(name),
                Err(CorpusError::MissingAbstract { .. }) => {
                    debug!(file = %name, "Excluding record without abstract");
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "Excluding unreadable record");
                }
            }
            progress(done + 1, total);
        }

        info!(
            candidates = total,
            retained = files.len(),
            excluded = total - files.len(),
            "Corpus opened"
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            files,
            candidates: total,
            cleaner: options.clean.build(),
        })
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files that matched the extension before abstract filtering.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates
    }

    /// Number of matching files dropped at construction.
    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.candidates - self.files.len()
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Retained file names in index order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn file_name(&self, index: usize) -> Option<&str> {
        self.files.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn path(&self, index: usize) -> Option<PathBuf> {
        self.file_name(index).map(|name| self.dir.join(name))
    }

    /// Whether abstracts returned by [`get`](Self::get) are cleaned.
    #[must_use]
    pub fn is_cleaning(&self) -> bool {
        self.cleaner.is_some()
    }

    /// Returns the abstract of record `index`, cleaned when a cleaner is
    /// configured.
    ///
    /// The record is re-read on every call.
    ///
    /// # Errors
    ///
    /// - [`CorpusError::IndexOutOfRange`] when `index >= len()`
    /// - [`CorpusError::Record`], [`CorpusError::MissingAward`] or
    ///   [`CorpusError::MissingAbstract`] when the file changed on disk
    ///   since construction
    #[instrument(level = "debug", skip(self))]
    pub fn get(&self, index: usize) -> Result<String, CorpusError> {
        let path = self.checked_path(index)?;
        let text = read_abstract(&path)?;
        Ok(match &self.cleaner {
            Some(cleaner) => cleaner.clean(&text),
            None => text,
        })
    }

    /// Returns the categorical metadata of record `index`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn metadata(&self, index: usize) -> Result<AwardMetadata, CorpusError> {
        let path = self.checked_path(index)?;
        with_award(&path, |award| Ok(AwardMetadata::from_award(award)))
    }

    /// Returns a copy of the full award record at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn award(&self, index: usize) -> Result<Node, CorpusError> {
        let path = self.checked_path(index)?;
        with_award(&path, |award| Ok(award.clone()))
    }

    /// Iterates over every abstract in index order.
    pub fn iter(&self) -> impl Iterator<Item = Result<String, CorpusError>> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }

    /// Picks up to `count` distinct indices, reproducibly for a given seed.
    #[must_use]
    pub fn sample(&self, count: usize, seed: u64) -> Vec<usize> {
        sample_indices(self.len(), count, seed)
    }

    fn checked_path(&self, index: usize) -> Result<PathBuf, CorpusError> {
        self.path(index).ok_or(CorpusError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }
}

/// Lists the file names in `dir` that end with `extension`, sorted.
///
/// Names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns [`CorpusError::ListDir`] when the directory cannot be read.
pub fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<String>, CorpusError> {
    let list_error = |source| CorpusError::ListDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(extension) => names.push(name),
            Ok(_) => {}
            Err(raw) => debug!(name = ?raw, "Skipping non UTF-8 file name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Reads the raw abstract of the record at `path`.
///
/// # Errors
///
/// Returns the reason the record has no usable abstract.
pub fn read_abstract(path: &Path) -> Result<String, CorpusError> {
    with_award(path, |award| {
        abstract_text(award)
            .map(str::to_string)
            .ok_or_else(|| CorpusError::MissingAbstract {
                path: path.to_path_buf(),
            })
    })
}

/// Parses the record at `path` and hands its award section to `f`.
fn with_award<T>(
    path: &Path,
    f: impl FnOnce(&Node) -> Result<T, CorpusError>,
) -> Result<T, CorpusError> {
    let document = record::parse(path)?;
    match extract_award(&document) {
        AwardLookup::Found(award) => f(award),
        AwardLookup::Absent(section) => Err(CorpusError::MissingAward {
            path: path.to_path_buf(),
            section,
        }),
    }
}

/// Returns `min(count, len)` distinct indices below `len`.
///
/// The same `(len, count, seed)` always yields the same indices.
#[must_use]
pub fn sample_indices(len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, len, count.min(len)).into_vec()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn write_record(dir: &Path, name: &str, award_body: &str) {
        fs::write(
            dir.join(name),
            format!("<?xml version=\"1.0\"?><rootTag><Award>{award_body}</Award></rootTag>"),
        )
        .unwrap();
    }

    fn raw_options() -> CorpusOptions {
        CorpusOptions::default().with_clean(CleanOptions::raw())
    }

    #[test]
    fn test_open_missing_directory_is_fatal() {
        let result = CorpusDataset::open(Path::new("/nonexistent/awards"), raw_options());
        assert!(matches!(result, Err(CorpusError::ListDir { .. })));
    }

    #[test]
    fn test_open_empty_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();
        assert!(corpus.is_empty());
        assert_eq!(corpus.candidate_count(), 0);
        assert!(matches!(
            corpus.get(0),
            Err(CorpusError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_open_sorts_and_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), "b.xml", "<AbstractNarration>Second.</AbstractNarration>");
        write_record(dir.path(), "a.xml", "<AbstractNarration>First.</AbstractNarration>");
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();
        assert_eq!(corpus.files(), ["a.xml", "b.xml"]);
        assert_eq!(corpus.get(0).unwrap(), "First.");
        assert_eq!(corpus.get(1).unwrap(), "Second.");
    }

    #[test]
    fn test_open_excludes_records_without_abstract() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), "1.xml", "<AbstractNarration>Kelp.</AbstractNarration>");
        write_record(dir.path(), "2.xml", "<AbstractNarration/>");
        write_record(dir.path(), "3.xml", "<AwardID>3</AwardID>");
        fs::write(dir.path().join("4.xml"), "<rootTag><Award>").unwrap();
        fs::write(dir.path().join("5.xml"), "<other/>").unwrap();

        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();
        assert_eq!(corpus.files(), ["1.xml"]);
        assert_eq!(corpus.candidate_count(), 5);
        assert_eq!(corpus.excluded_count(), 4);
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), "1.award", "<AbstractNarration>Kelp.</AbstractNarration>");
        write_record(dir.path(), "2.xml", "<AbstractNarration>Kelp.</AbstractNarration>");

        let options = raw_options().with_extension(".award");
        let corpus = CorpusDataset::open(dir.path(), options).unwrap();
        assert_eq!(corpus.files(), ["1.award"]);
    }

    #[test]
    fn test_get_cleans_by_default() {
        let dir = TempDir::new().unwrap();
        write_record(
            dir.path(),
            "1.xml",
            "<AbstractNarration>The COVID-19 kelp forests.</AbstractNarration>",
        );

        let corpus = CorpusDataset::open(dir.path(), CorpusOptions::default()).unwrap();
        assert!(corpus.is_cleaning());
        assert_eq!(corpus.get(0).unwrap(), "covid19 kelp forests");
    }

    #[test]
    fn test_get_reports_record_removed_after_open() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), "1.xml", "<AbstractNarration>Kelp.</AbstractNarration>");
        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();

        fs::remove_file(dir.path().join("1.xml")).unwrap();
        let err = corpus.get(0).unwrap_err();
        assert!(matches!(err, CorpusError::Record(ref e) if e.is_not_found()));
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_get_reports_abstract_removed_after_open() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), "1.xml", "<AbstractNarration>Kelp.</AbstractNarration>");
        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();

        write_record(dir.path(), "1.xml", "<AbstractNarration/>");
        assert!(matches!(
            corpus.get(0),
            Err(CorpusError::MissingAbstract { .. })
        ));
    }

    #[test]
    fn test_metadata_and_award_share_index() {
        let dir = TempDir::new().unwrap();
        write_record(
            dir.path(),
            "1.xml",
            "<AwardTitle>Kelp synchrony</AwardTitle><AbstractNarration>Kelp.</AbstractNarration>",
        );
        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();

        let metadata = corpus.metadata(0).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Kelp synchrony"));
        let award = corpus.award(0).unwrap();
        assert_eq!(award.get("AwardTitle").and_then(Node::as_text), Some("Kelp synchrony"));
        assert!(corpus.metadata(1).unwrap_err().is_index_error());
    }

    #[test]
    fn test_iter_yields_in_index_order() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [("c.xml", "Three."), ("a.xml", "One."), ("b.xml", "Two.")] {
            write_record(
                dir.path(),
                name,
                &format!("<AbstractNarration>{text}</AbstractNarration>"),
            );
        }
        let corpus = CorpusDataset::open(dir.path(), raw_options()).unwrap();
        let texts: Vec<String> = corpus.iter().collect::<Result<_, _>>().unwrap();
        assert_eq!(texts, ["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_open_reports_progress_for_every_candidate() {
        let dir = TempDir::new().unwrap();
        write_record(dir.path(), "1.xml", "<AbstractNarration>Kelp.</AbstractNarration>");
        write_record(dir.path(), "2.xml", "<AbstractNarration/>");

        let mut seen = Vec::new();
        CorpusDataset::open_with_progress(dir.path(), raw_options(), |done, total| {
            seen.push((done, total));
        })
        .unwrap();
        assert_eq!(seen, [(1, 2), (2, 2)]);
    }

    #[test]
    fn test_sample_indices_is_reproducible_and_distinct() {
        let first = sample_indices(100, 10, 42);
        assert_eq!(first, sample_indices(100, 10, 42));
        assert_eq!(first.len(), 10);
        assert_eq!(first.iter().collect::<HashSet<_>>().len(), 10);
        assert!(first.iter().all(|&index| index < 100));
    }

    #[test]
    fn test_sample_indices_caps_count() {
        let mut all = sample_indices(5, 50, 7);
        all.sort_unstable();
        assert_eq!(all, [0, 1, 2, 3, 4]);
        assert!(sample_indices(0, 3, 7).is_empty());
    }
}
