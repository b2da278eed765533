// src/core/stopwords/keywords.rs

/// Common programming-language keywords.
///
/// Only added to the stopword set when `stopwords.programming_keywords` is
/// enabled in the configuration.
pub const PROGRAMMING_KEYWORDS: &[&str] = &[
    "var", "let", "const", "def", "class", "return", "import", "function", "if", "else", "elif",
    "then", "end", "do", "while", "for", "try", "catch", "finally", "throw", "new", "this",
    "self", "super", "true", "false", "none", "null", "undefined", "void", "public", "private",
    "protected", "static", "final", "abstract", "interface", "extends", "implements", "package",
    "namespace", "using", "include", "define", "ifdef", "endif", "extern", "typeof",
    "instanceof", "async", "await", "yield", "lambda", "del", "pass", "break", "continue",
    "raise", "except", "assert", "switch", "case", "default", "goto", "struct", "enum", "union",
    "typedef", "sizeof", "volatile", "inline", "virtual",
];
