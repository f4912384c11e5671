use std::{
    collections::{BTreeSet, HashMap},
    sync::LazyLock,
};

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "return", "if", "else", "for", "while", "class", "import",
    "export", "default", "async", "await", "try", "catch",
];

const TYPESCRIPT_EXTRA_KEYWORDS: &[&str] = &["interface", "type"];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "return", "if", "elif", "else", "for", "while", "import", "from", "as", "try",
    "except", "with", "lambda", "yield",
];

static BUILTIN: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::builtin);

/// Lexical facts the highlighter needs about one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDef {
    pub keywords: BTreeSet<String>,
    /// Marker that starts a comment running to end of line (`//`, `#`).
    pub line_comment: Option<String>,
    /// Characters that open and close string literals.
    pub quotes: Vec<char>,
}

impl LanguageDef {
    pub fn new<I, S>(keywords: I, line_comment: Option<&str>, quotes: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            line_comment: line_comment.map(str::to_string),
            quotes: quotes.chars().collect(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_quote(&self, c: char) -> bool {
        self.quotes.contains(&c)
    }

    fn javascript() -> Self {
        Self::new(JAVASCRIPT_KEYWORDS.iter().copied(), Some("//"), "\"'`")
    }

    fn typescript() -> Self {
        Self::new(
            JAVASCRIPT_KEYWORDS
                .iter()
                .chain(TYPESCRIPT_EXTRA_KEYWORDS)
                .copied(),
            Some("//"),
            "\"'`",
        )
    }

    fn python() -> Self {
        Self::new(PYTHON_KEYWORDS.iter().copied(), Some("#"), "\"'")
    }
}

/// Maps fence language tags to [`LanguageDef`]s.
///
/// Tags and aliases are matched case-insensitively. A registry is plain data;
/// share it by reference.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, LanguageDef>,
    aliases: HashMap<String, String>,
}

impl LanguageRegistry {
    /// An empty registry: every language falls back to plain text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `javascript`, `typescript` and `python`, plus the `js`, `ts` and `py`
    /// aliases.
    pub fn builtin() -> Self {
        let mut reg = Self::empty();
        reg.insert("javascript", LanguageDef::javascript());
        reg.insert("typescript", LanguageDef::typescript());
        reg.insert("python", LanguageDef::python());
        reg.alias("js", "javascript");
        reg.alias("ts", "typescript");
        reg.alias("py", "python");
        reg
    }

    /// Adds or replaces a language. Replacing a language an alias points to
    /// changes what the alias resolves to.
    pub fn insert(&mut self, tag: &str, def: LanguageDef) {
        let tag = tag.to_ascii_lowercase();
        self.aliases.remove(&tag);
        self.languages.insert(tag, def);
    }

    /// Makes `alias` resolve to the language registered under `target`.
    pub fn alias(&mut self, alias: &str, target: &str) {
        self.aliases
            .insert(alias.to_ascii_lowercase(), target.to_ascii_lowercase());
    }

    pub fn get(&self, tag: &str) -> Option<&LanguageDef> {
        let tag = tag.to_ascii_lowercase();
        if let Some(def) = self.languages.get(&tag) {
            return Some(def);
        }
        self.aliases
            .get(&tag)
            .and_then(|target| self.languages.get(target))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Registered language tags in sorted order (aliases excluded).
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

/// The shared, immutable builtin registry.
pub fn builtin_registry() -> &'static LanguageRegistry {
    &BUILTIN
}
