//! Lexical analysis module for the Monkey language.
//!
//! This module turns source text into a stream of tokens for the parser.
//! The [`Scanner`] pulls codepoints from a [`CharSource`] one at a time,
//! so in-memory strings and files share one code path.
//!
//! Words are defined by exclusion: any run of codepoints that are not
//! whitespace, control characters or reserved punctuation forms a word, so
//! identifiers such as `猫` need no Unicode category tables. A word is then
//! either one of the keywords `else false fn if let return true` or an
//! identifier. Runs of ASCII digits are integers. `==` and `!=` are found
//! with a single codepoint of lookahead. Anything else becomes an
//! `Unknown` token and scanning carries on.
//!
//! Lines and columns are 1-based. Columns count codepoints, and a tab moves
//! to the next multiple-of-four stop (`1 -> 5`, `5 -> 9`).

pub mod classify;
pub mod position;
pub mod scanner;
pub mod source;
pub mod token;

pub use scanner::Scanner;
pub use source::{CharSource, FileSource, StrSource};
pub use token::{keyword_from_word, symbol_from_char, SourceLocation, Token, TokenKind};

/// メモリ上のテキストをトークン化する。最後は `Eof`
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).flatten().collect()
}

/// デバッグ用：1行に1トークン
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
