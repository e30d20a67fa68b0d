//! Canonical snippet languages and highlighter-name mapping.
//!
//! The backend stores languages as upper-case identifiers (`PYTHON`, `CPP`).
//! The highlighter reports its own lower-case names (`python`, `cpp`). Only
//! names with an entry here count as a detection; anything else is treated as
//! "no detection".

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Bash,
    C,
    Cpp,
    Csharp,
    Css,
    Diff,
    Django,
    Dockerfile,
    Go,
    Graphql,
    Ini,
    Java,
    Javascript,
    Jinja,
    Json,
    Kotlin,
    Less,
    Lua,
    Makefile,
    Markdown,
    Objectivec,
    Perl,
    Php,
    PhpTemplate,
    Plaintext,
    Pgsql,
    Python,
    PythonRepl,
    R,
    Ruby,
    Rust,
    Scss,
    Shell,
    Sql,
    Swift,
    Typescript,
    Vbnet,
    Wasm,
    Xml,
    Yaml,
}

impl Language {
    /// Every supported language, in select-option order.
    pub const ALL: [Self; 40] = [
        Self::Bash,
        Self::C,
        Self::Cpp,
        Self::Csharp,
        Self::Css,
        Self::Diff,
        Self::Django,
        Self::Dockerfile,
        Self::Go,
        Self::Graphql,
        Self::Ini,
        Self::Java,
        Self::Javascript,
        Self::Jinja,
        Self::Json,
        Self::Kotlin,
        Self::Less,
        Self::Lua,
        Self::Makefile,
        Self::Markdown,
        Self::Objectivec,
        Self::Perl,
        Self::Php,
        Self::PhpTemplate,
        Self::Plaintext,
        Self::Pgsql,
        Self::Python,
        Self::PythonRepl,
        Self::R,
        Self::Ruby,
        Self::Rust,
        Self::Scss,
        Self::Shell,
        Self::Sql,
        Self::Swift,
        Self::Typescript,
        Self::Vbnet,
        Self::Wasm,
        Self::Xml,
        Self::Yaml,
    ];

    /// Identifier stored by the backend and used as the select option value.
    pub fn id(self) -> &'static str {
        self.row().0
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        self.row().1
    }

    /// Name the highlighter uses for this language.
    pub fn highlighter_name(self) -> &'static str {
        self.row().2
    }

    fn row(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Bash => ("BASH", "Bash", "bash"),
            Self::C => ("C", "C", "c"),
            Self::Cpp => ("CPP", "C++", "cpp"),
            Self::Csharp => ("CSHARP", "C#", "csharp"),
            Self::Css => ("CSS", "CSS", "css"),
            Self::Diff => ("DIFF", "Diff", "diff"),
            Self::Django => ("DJANGO", "Django", "django"),
            Self::Dockerfile => ("DOCKERFILE", "Dockerfile", "dockerfile"),
            Self::Go => ("GO", "Go", "go"),
            Self::Graphql => ("GRAPHQL", "GraphQL", "graphql"),
            Self::Ini => ("INI", "INI", "ini"),
            Self::Java => ("JAVA", "Java", "java"),
            Self::Javascript => ("JAVASCRIPT", "JavaScript", "javascript"),
            // Jinja shares the django grammar.
            Self::Jinja => ("JINJA", "Jinja", "django"),
            Self::Json => ("JSON", "JSON", "json"),
            Self::Kotlin => ("KOTLIN", "Kotlin", "kotlin"),
            Self::Less => ("LESS", "Less", "less"),
            Self::Lua => ("LUA", "Lua", "lua"),
            Self::Makefile => ("MAKEFILE", "Makefile", "makefile"),
            Self::Markdown => ("MARKDOWN", "Markdown", "markdown"),
            Self::Objectivec => ("OBJECTIVEC", "Objective-C", "objectivec"),
            Self::Perl => ("PERL", "Perl", "perl"),
            Self::Php => ("PHP", "PHP", "php"),
            Self::PhpTemplate => ("PHP_TEMPLATE", "PHP Template", "php-template"),
            Self::Plaintext => ("PLAINTEXT", "Plain Text", "plaintext"),
            Self::Pgsql => ("PGSQL", "PostgreSQL", "pgsql"),
            Self::Python => ("PYTHON", "Python", "python"),
            Self::PythonRepl => ("PYTHON_REPL", "Python REPL", "python-repl"),
            Self::R => ("R", "R", "r"),
            Self::Ruby => ("RUBY", "Ruby", "ruby"),
            Self::Rust => ("RUST", "Rust", "rust"),
            Self::Scss => ("SCSS", "SCSS", "scss"),
            Self::Shell => ("SHELL", "Shell", "shell"),
            Self::Sql => ("SQL", "SQL", "sql"),
            Self::Swift => ("SWIFT", "Swift", "swift"),
            Self::Typescript => ("TYPESCRIPT", "TypeScript", "typescript"),
            Self::Vbnet => ("VBNET", "VB.NET", "vbnet"),
            Self::Wasm => ("WASM", "WebAssembly", "wasm"),
            Self::Xml => ("XML", "XML", "xml"),
            Self::Yaml => ("YAML", "YAML", "yaml"),
        }
    }

    /// Map a highlighter language name (any case) to a canonical language.
    ///
    /// Names shared by several entries resolve to the first in [`Self::ALL`].
    pub fn from_highlighter_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.highlighter_name() == lower)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best-effort language guesser over raw code.
pub trait LanguageDetector {
    /// Highlighter name of the most likely language, if any.
    fn detect(&self, code: &str) -> Option<String>;
}

/// A successful auto-detection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    /// Name as reported by the detector, lower-cased.
    pub detector_name: String,
}

/// Run detection on `code` and map it into the canonical table.
///
/// Blank content never produces a detection.
pub fn detect_language<D: LanguageDetector + ?Sized>(detector: &D, code: &str) -> Option<Detection> {
    if code.trim().is_empty() {
        return None;
    }
    let name = detector.detect(code)?;
    let language = Language::from_highlighter_name(&name)?;
    Some(Detection {
        language,
        detector_name: name.to_ascii_lowercase(),
    })
}

/// Language to submit when the selector is left on "auto".
pub fn language_for_submit<D: LanguageDetector + ?Sized>(detector: &D, code: &str) -> Language {
    detect_language(detector, code).map_or(Language::Plaintext, |d| d.language)
}
