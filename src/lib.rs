//! Monkey Language Lexer Library
//!
//! This library provides the lexical front end of the Monkey interpreter.

pub mod checker;
pub mod config;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use checker::{check_source, CheckState};
pub use config::ScannerConfig;
pub use error::{ErrorCollector, LexError, LexResult, MonkeyError, MonkeyResult};
pub use lexer::{tokenize, CharSource, FileSource, Scanner, SourceLocation, StrSource, Token, TokenKind};
