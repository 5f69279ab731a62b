//! Rule-based English lemmatizer for nouns.
//!
//! Mirrors the noun path of a dictionary lemmatizer: an irregular-form table
//! is consulted first, then a short list of inflectional suffix rules. Without
//! a full dictionary, words that merely look plural (`always`, `species`) are
//! protected by an invariant list and suffix guards.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Irregular plural → lemma.
const IRREGULAR: &[(&str, &str)] = &[
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("axes", "axis"),
    ("bacteria", "bacterium"),
    ("bases", "basis"),
    ("caches", "cache"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("curricula", "curriculum"),
    ("data", "datum"),
    ("diagnoses", "diagnosis"),
    ("feet", "foot"),
    ("focuses", "focus"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("halves", "half"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("larvae", "larva"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loci", "locus"),
    ("matrices", "matrix"),
    ("media", "medium"),
    ("men", "man"),
    ("mice", "mouse"),
    ("niches", "niche"),
    ("nuclei", "nucleus"),
    ("phenomena", "phenomenon"),
    ("radii", "radius"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("stimuli", "stimulus"),
    ("strata", "stratum"),
    ("syntheses", "synthesis"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("viruses", "virus"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Words ending in `s` that are already base forms.
const INVARIANT: &[&str] = &[
    "always",
    "atlas",
    "bias",
    "canvas",
    "chaos",
    "economics",
    "ethics",
    "gas",
    "lens",
    "mathematics",
    "means",
    "news",
    "perhaps",
    "physics",
    "politics",
    "series",
    "sometimes",
    "species",
    "whereas",
];

/// Suffix rewrite rules, most specific first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("s", ""),
];

/// Endings that mark a singular noun or an adjective, not a plural.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Shortest word the suffix rules will touch (`has`, `its`, `bus` stay).
const MIN_RULE_LEN: usize = 4;

/// Maps inflected English nouns to their dictionary base form.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
            invariant: INVARIANT.iter().copied().collect(),
        }
    }

    /// Number of irregular forms known to the lemmatizer.
    #[must_use]
    pub fn irregular_count(&self) -> usize {
        self.irregular.len()
    }

    /// Returns the lemma of a lowercase token.
    #[must_use]
    pub fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = self.irregular.get(word) {
            return Cow::Borrowed(*lemma);
        }
        if self.invariant.contains(word)
            || word.len() < MIN_RULE_LEN
            || SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return Cow::Borrowed(word);
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if replacement.is_empty() {
                    return Cow::Borrowed(stem);
                }
                return Cow::Owned(format!("{stem}{replacement}"));
            }
        }

        Cow::Borrowed(word)
    }
}
