// src/core/stopwords/nltk.rs
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Cursor, Read as _};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::core::stopwords::{LexiconError, StopwordSource};

/// Location of the NLTK stopwords package.
pub const STOPWORDS_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/stopwords.zip";

const CORPUS_FILE: &str = "corpora/stopwords/english";
const CORPUS_ARCHIVE: &str = "corpora/stopwords.zip";
const ARCHIVE_MEMBER: &str = "stopwords/english";

/// Retrieves the zipped stopwords package when it is not installed locally.
pub trait CorpusFetcher {
    /// # Errors
    ///
    /// Returns an error when the package cannot be retrieved.
    fn fetch(&self) -> Result<Vec<u8>, LexiconError>;
}

/// Downloads the package over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url: String,
}

impl HttpFetcher {
    #[inline]
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(STOPWORDS_URL)
    }
}

impl CorpusFetcher for HttpFetcher {
    fn fetch(&self) -> Result<Vec<u8>, LexiconError> {
        debug!("GET {}", self.url);
        let response = reqwest::blocking::get(&self.url)?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// The NLTK English stopword list, read from an NLTK data directory.
///
/// Each data directory is searched for the unpacked list first and the zipped
/// package second. When neither exists anywhere and a fetcher is configured,
/// the package is fetched once and installed into the download directory.
pub struct NltkStopwords {
    data_dirs: Vec<PathBuf>,
    download_dir: Option<PathBuf>,
    fetcher: Option<Box<dyn CorpusFetcher>>,
}

impl NltkStopwords {
    /// A source that only looks in `data_dirs` and never downloads.
    #[inline]
    #[must_use]
    pub fn new(data_dirs: Vec<PathBuf>) -> Self {
        Self {
            data_dirs,
            download_dir: None,
            fetcher: None,
        }
    }

    /// Enables fetching when the list is missing locally. A fetched package
    /// is installed under `download_dir` when one is given.
    #[inline]
    #[must_use]
    pub fn with_fetcher<F>(mut self, fetcher: F, download_dir: Option<PathBuf>) -> Self
    where
        F: CorpusFetcher + 'static,
    {
        self.fetcher = Some(Box::new(fetcher));
        self.download_dir = download_dir;
        self
    }

    fn is_installed(&self) -> bool {
        self.data_dirs
            .iter()
            .any(|dir| dir.join(CORPUS_FILE).is_file() || dir.join(CORPUS_ARCHIVE).is_file())
    }

    fn find_local(&self) -> Result<Option<HashSet<String>>, LexiconError> {
        for dir in &self.data_dirs {
            let plain = dir.join(CORPUS_FILE);
            if plain.is_file() {
                debug!("Reading stopwords from {}", plain.display());
                return Ok(Some(parse_word_list(&fs::read_to_string(&plain)?)));
            }

            let archive = dir.join(CORPUS_ARCHIVE);
            if archive.is_file() {
                debug!("Reading stopwords from {}", archive.display());
                return read_archive(&fs::read(&archive)?).map(Some);
            }
        }
        Ok(None)
    }
}

impl StopwordSource for NltkStopwords {
    fn stopwords(&self) -> Result<HashSet<String>, LexiconError> {
        if let Some(words) = self.find_local()? {
            return Ok(words);
        }

        let Some(fetcher) = &self.fetcher else {
            return Err(LexiconError::Unavailable);
        };

        info!("Downloading NLTK stopwords data...");
        let archive = fetcher.fetch()?;
        let words = read_archive(&archive)?;

        if let Some(dir) = &self.download_dir {
            if let Err(err) = install(dir, &archive, &words) {
                warn!("Could not install stopwords into {}: {err}", dir.display());
            }
        }

        Ok(words)
    }

    fn needs_download(&self) -> bool {
        self.fetcher.is_some() && !self.is_installed()
    }
}

/// NLTK data directories searched by default.
#[inline]
#[must_use]
pub fn default_data_dirs() -> Vec<PathBuf> {
    let mut data_dirs: Vec<PathBuf> = dirs::home_dir()
        .map(|home| home.join("nltk_data"))
        .into_iter()
        .collect();
    data_dirs.extend(
        [
            "/usr/share/nltk_data",
            "/usr/local/share/nltk_data",
            "/usr/lib/nltk_data",
            "/usr/local/lib/nltk_data",
        ]
        .into_iter()
        .map(PathBuf::from),
    );
    data_dirs
}

#[inline]
#[must_use]
pub fn default_download_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("nltk_data"))
}

/// One word per line; surrounding whitespace and blank lines are dropped.
#[inline]
#[must_use]
pub fn parse_word_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Extracts the English list from the zipped NLTK stopwords package.
///
/// # Errors
///
/// Returns an error if the bytes are not a zip archive or the archive lacks
/// the English list.
#[inline]
pub fn read_archive(bytes: &[u8]) -> Result<HashSet<String>, LexiconError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut member = archive.by_name(ARCHIVE_MEMBER)?;
    let mut text = String::new();
    member.read_to_string(&mut text)?;
    Ok(parse_word_list(&text))
}

fn install(dir: &Path, archive: &[u8], words: &HashSet<String>) -> io::Result<()> {
    let corpus_file = dir.join(CORPUS_FILE);
    if let Some(parent) = corpus_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dir.join(CORPUS_ARCHIVE), archive)?;

    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    fs::write(&corpus_file, sorted.join("\n"))
}
