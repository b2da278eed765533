// src/core/languages.rs
use std::path::Path;

/// Display label for a lowercase file extension (without the dot).
#[inline]
#[must_use]
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let language = match extension {
        "py" => "Python",
        "js" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "java" => "Java",
        "go" => "Go",
        "rs" => "Rust",
        "c" | "h" => "C",
        "cpp" | "cc" | "cxx" | "hpp" => "C++",
        "cs" => "C#",
        "rb" => "Ruby",
        "php" => "PHP",
        "swift" => "Swift",
        "kt" => "Kotlin",
        "scala" => "Scala",
        "r" => "R",
        "m" => "Objective-C",
        "sh" => "Shell",
        "bash" => "Bash",
        "pl" => "Perl",
        "lua" => "Lua",
        "vim" => "VimScript",
        "el" => "Emacs-Lisp",
        "clj" => "Clojure",
        "ex" => "Elixir",
        "erl" => "Erlang",
        "hs" => "Haskell",
        "ml" => "OCaml",
        "sql" => "SQL",
        "dockerfile" => "Docker",
        "tf" => "Terraform",
        "yaml" | "yml" => "YAML",
        "json" => "JSON",
        "xml" => "XML",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "sass" => "Sass",
        "less" => "Less",
        "md" => "Markdown",
        "rst" => "reStructuredText",
        "tex" => "LaTeX",
        _ => return None,
    };
    Some(language)
}

/// Language of a file, judged by its extension alone.
///
/// The extension is lowercased first, so `Main.RS` is Rust. Dotfiles such as
/// `.py` have no extension and map to nothing.
#[inline]
#[must_use]
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    language_for_extension(&extension)
}
