//! 統一的なエラーハンドリングモジュール
//!
//! スキャナの致命的な失敗は `LexError` として `LexResult` で返す。
//! 認識できないコードポイントはエラーではなく `Unknown` トークンになり、
//! チェッカーがそれを診断に変換して `ErrorCollector` に集める。

use crate::lexer::SourceLocation;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use std::io;
use thiserror::Error;

/// クレート全体の統一エラー型
#[derive(Error, Debug)]
pub enum MonkeyError {
    /// 字句解析エラー
    #[error("lexical error: {0}")]
    Lexer(#[from] LexError),

    /// スキャナ外のファイル操作エラー
    #[error("file operation error: {0}")]
    Io(String),
}

/// 字句解析中のエラー
#[derive(Error, Debug)]
pub enum LexError {
    /// 文字ソースを開けなかった
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// 読み込みの途中で失敗した
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid UTF-8 in '{path}' at byte {offset}")]
    InvalidUtf8 { path: String, offset: usize },

    /// 入力が残っていないのに先読みした
    #[error("peeked past the end of input")]
    PeekPastEnd,

    /// 致命的エラーの後に再びトークンを要求された
    #[error("scanner halted after an earlier error")]
    Halted,

    /// どのトークン規則にも合わないコードポイント。
    /// チェッカーが報告するだけで、スキャナ自身は返さない。
    #[error("unrecognized codepoint {ch:?}")]
    UnrecognizedCodepoint { ch: char, location: SourceLocation },
}

/// codespanに登録したファイルに紐づくエラー
#[derive(Debug)]
pub struct DiagnosticError {
    pub error: MonkeyError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: MonkeyError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingの診断に変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels, notes) = match &self.error {
            MonkeyError::Lexer(e) => self.lexer_error_to_diagnostic(e),
            MonkeyError::Io(message) => {
                (format!("file operation error: {}", message), vec![], vec![])
            }
        };

        Diagnostic::error()
            .with_message(message)
            .with_labels(labels)
            .with_notes(notes)
    }

    fn lexer_error_to_diagnostic(&self, e: &LexError) -> (String, Vec<Label<usize>>, Vec<String>) {
        match e {
            LexError::UnrecognizedCodepoint { ch, location } => {
                let start = location.offset;
                (
                    format!("unrecognized codepoint {:?}", ch),
                    vec![Label::primary(self.file_id, start..start + ch.len_utf8())
                        .with_message("no token starts with this character")],
                    // codespanはタブを1列と数える
                    vec![format!("at {}", location)],
                )
            }
            LexError::InvalidUtf8 { path, offset } => (
                format!("invalid UTF-8 in '{}' at byte {}", path, offset),
                // 不正なバイト列は置換文字(U+FFFD)として登録されている
                vec![Label::primary(
                    self.file_id,
                    *offset..*offset + char::REPLACEMENT_CHARACTER.len_utf8(),
                )
                .with_message("not valid UTF-8")],
                vec![],
            ),
            other => (other.to_string(), vec![], vec![]),
        }
    }
}

/// チェック中に見つかった診断を集める
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: MonkeyError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }
}

pub type LexResult<T> = Result<T, LexError>;

pub type MonkeyResult<T> = Result<T, MonkeyError>;
