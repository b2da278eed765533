// src/core/scanner.rs
mod language;
mod walker;
mod word;


pub use language::{LanguageScan, collect_languages};
pub use walker::TreeWalker;
pub use word::{TEXT_EXTENSIONS, WordScan, collect_words, decode_permissive, extract_words, is_text_file};
