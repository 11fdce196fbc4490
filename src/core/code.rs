//! # Code Renderer
//!
//! A token-level heuristic highlighter for the Dart snippets in the lesson
//! catalog. It is not a lexer: lines are split on single spaces and each
//! token is classified on its own, with no notion of multi-line strings,
//! operators or escapes.
//!
//! Comment styling is per token. In `x = 1; // note here` only `//` is a
//! comment token; `note` and `here` are classified independently.

/// Dart keywords, matched against the token with punctuation removed.
pub const KEYWORDS: &[&str] = &[
    "class", "final", "const", "return", "void", "async", "await", "extends", "implements",
    "import", "package", "override", "super", "if", "else", "for", "while",
];

/// Flutter / Riverpod type names, matched the same way as keywords.
pub const TYPES: &[&str] = &[
    "String",
    "int",
    "bool",
    "List",
    "Map",
    "Widget",
    "BuildContext",
    "WidgetRef",
    "Provider",
    "Notifier",
    "NotifierProvider",
    "AsyncNotifier",
    "Future",
    "ConsumerWidget",
    "StatefulWidget",
    "StatelessWidget",
];

const LINE_COMMENT: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    Keyword,
    Type,
    Comment,
    Str,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub style: TokenStyle,
}

/// One numbered, tokenized source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// 1-based line number.
    pub number: usize,
    pub tokens: Vec<Token<'a>>,
}

/// Splits `code` into rows and classifies every space-separated token.
///
/// Consecutive spaces yield empty tokens; they are kept so the rendered
/// row preserves the original indentation.
pub fn highlight(code: &str) -> Vec<Row<'_>> {
    code.split('\n')
        .enumerate()
        .map(|(i, line)| Row {
            number: i + 1,
            tokens: line
                .split(' ')
                .map(|text| Token {
                    text,
                    style: classify(text),
                })
                .collect(),
        })
        .collect()
}

/// Classifies a single raw token.
pub fn classify(token: &str) -> TokenStyle {
    let clean: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if KEYWORDS.contains(&clean.as_str()) {
        TokenStyle::Keyword
    } else if TYPES.contains(&clean.as_str()) {
        TokenStyle::Type
    } else if token.starts_with(LINE_COMMENT) {
        TokenStyle::Comment
    } else if token.contains('\'') {
        TokenStyle::Str
    } else {
        TokenStyle::Text
    }
}
