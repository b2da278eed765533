// src/core/stopwords.rs
mod keywords;
mod nltk;

use log::warn;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::FrequencyTable;

pub use keywords::PROGRAMMING_KEYWORDS;
pub use nltk::{
    CorpusFetcher, HttpFetcher, NltkStopwords, STOPWORDS_URL, default_data_dirs,
    default_download_dir, parse_word_list, read_archive,
};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("stopword data is not installed and downloading is disabled")]
    Unavailable,
    #[error("failed to read stopword data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to download stopword data: {0}")]
    Download(#[from] reqwest::Error),
    #[error("stopword archive is invalid: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Provides a stopword set, or reports that none is available.
pub trait StopwordSource {
    /// # Errors
    ///
    /// Returns an error when the stopword data cannot be obtained.
    fn stopwords(&self) -> Result<HashSet<String>, LexiconError>;

    /// Whether [`StopwordSource::stopwords`] will go to the network.
    fn needs_download(&self) -> bool {
        false
    }
}

/// A stopword set held in memory.
#[derive(Debug, Clone, Default)]
pub struct FixedStopwords {
    words: HashSet<String>,
}

impl FixedStopwords {
    #[inline]
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl StopwordSource for FixedStopwords {
    fn stopwords(&self) -> Result<HashSet<String>, LexiconError> {
        Ok(self.words.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl StopwordFilter {
    /// Builds the filter from `source`, degrading to an empty set when the
    /// source is unavailable.
    #[inline]
    #[must_use]
    pub fn load(source: &dyn StopwordSource, programming_keywords: bool) -> Self {
        let mut words = source.stopwords().unwrap_or_else(|err| {
            warn!("Could not load stopwords: {err}");
            HashSet::new()
        });
        if programming_keywords {
            words.extend(PROGRAMMING_KEYWORDS.iter().map(|word| (*word).to_owned()));
        }
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The table minus every stopword; other counts are untouched.
    #[inline]
    #[must_use]
    pub fn apply(&self, table: &FrequencyTable) -> FrequencyTable {
        table.without(&self.words)
    }
}
