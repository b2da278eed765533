// src/core/exclude.rs
mod loader;
mod patterns;

pub use loader::load_exclude_patterns;
pub use patterns::ExcludePatterns;
