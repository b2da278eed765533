// src/core.rs
pub mod exclude;
pub mod languages;
pub mod scanner;
pub mod stopwords;
