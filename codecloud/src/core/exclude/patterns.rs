// src/core/exclude/patterns.rs
use glob::Pattern;
use log::warn;
use std::path::{Component, Path};

#[derive(Debug, Default)]
pub struct ExcludePatterns {
    /// Exclusion patterns in file order.
    /// Each tuple contains:
    /// - The pattern text as written in the exclusion file
    /// - The compiled glob, or `None` when the text is not valid glob syntax
    patterns: Vec<(String, Option<Pattern>)>,
}

impl ExcludePatterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds a pattern to the exclusion list.
    ///
    /// Blank lines and `#` comments are ignored. Text that is not valid glob
    /// syntax is kept so the pattern count stays faithful to the file, but it
    /// never matches anything.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return;
        }

        let compiled = match Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(err) => {
                warn!("Ignoring malformed exclusion pattern '{pattern}': {err}");
                None
            }
        };
        self.patterns.push((pattern.to_owned(), compiled));
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern text in the order it was added.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(raw, _)| raw.as_str())
    }

    /// Returns `true` when any segment of `path`, or its file name, matches
    /// any pattern.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let segments: Vec<_> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy()),
                _ => None,
            })
            .collect();
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        self.patterns
            .iter()
            .filter_map(|(_, compiled)| compiled.as_ref())
            .any(|pattern| {
                segments.iter().any(|segment| pattern.matches(segment))
                    || pattern.matches(&filename)
            })
    }
}

impl<'a> FromIterator<&'a str> for ExcludePatterns {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut patterns = Self::new();
        for pattern in iter {
            patterns.add_pattern(pattern);
        }
        patterns
    }
}
