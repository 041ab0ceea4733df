//! 字句チェック
//!
//! 入力全体をスキャンし、`Unknown` トークンをすべて診断に変換する。
//! パーサーに渡す前に、問題のあるコードポイントをまとめて報告できる。

use crate::config::ScannerConfig;
use crate::error::{ErrorCollector, LexError, MonkeyError, MonkeyResult};
use crate::lexer::{Scanner, StrSource, Token, TokenKind};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use std::fs;
use std::path::Path;

/// 診断用に登録したソースと、そこで見つかったエラー
pub struct CheckState {
    pub source_file: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
}

impl CheckState {
    /// ソースファイルを読み込む
    ///
    /// UTF-8として不正なファイルは置換文字で登録し、最初の不正バイトを
    /// `InvalidUtf8` 診断として記録する。
    pub fn new<P: AsRef<Path>>(source_file: P) -> MonkeyResult<Self> {
        let source_file_str = source_file.as_ref().display().to_string();
        let bytes = fs::read(source_file.as_ref())
            .map_err(|e| MonkeyError::Io(format!("failed to read {}: {}", source_file_str, e)))?;

        match String::from_utf8(bytes) {
            Ok(source) => Ok(Self::new_from_string(&source_file_str, source)),
            Err(e) => {
                let offset = e.utf8_error().valid_up_to();
                let source = String::from_utf8_lossy(e.as_bytes()).into_owned();
                let mut state = Self::new_from_string(&source_file_str, source);
                state.add_error(
                    LexError::InvalidUtf8 {
                        path: source_file_str,
                        offset,
                    }
                    .into(),
                );
                Ok(state)
            }
        }
    }

    /// メモリ上のテキストを `filename` として登録
    pub fn new_from_string(filename: &str, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(filename.to_string(), source.clone());

        Self {
            source_file: filename.to_string(),
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
        }
    }

    pub fn add_error(&mut self, error: MonkeyError) {
        self.error_collector.add_error(error, self.file_id);
    }

    /// 登録済みテキストをスキャンし、`Unknown` トークンを記録する
    ///
    /// 最後の `Eof` を含むトークン列全体を返す。
    pub fn scan(&mut self, config: ScannerConfig) -> MonkeyResult<Vec<Token>> {
        let source = StrSource::with_label(self.source.clone(), self.source_file.clone());
        let scanner = Scanner::with_source(source, config)?;
        let tokens = scanner.collect::<Result<Vec<_>, _>>()?;

        for token in &tokens {
            if let TokenKind::Unknown(ch) = token.kind {
                log::debug!("unrecognized codepoint {:?} at {}", ch, token.location);
                self.add_error(
                    LexError::UnrecognizedCodepoint {
                        ch,
                        location: token.location.clone(),
                    }
                    .into(),
                );
            }
        }

        Ok(tokens)
    }

    /// すべての診断を `writer` に書き出す
    pub fn emit_diagnostics<W: WriteColor>(&self, writer: &mut W) -> MonkeyResult<()> {
        let config = codespan_reporting::term::Config::default();
        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            codespan_reporting::term::emit(writer, &config, &self.files, &diagnostic)
                .map_err(|e| MonkeyError::Io(format!("failed to emit diagnostic: {}", e)))?;
        }
        Ok(())
    }

    /// すべての診断を標準エラー出力に報告
    pub fn report_diagnostics(&self, color: ColorChoice) -> MonkeyResult<()> {
        let writer = StandardStream::stderr(color);
        let mut lock = writer.lock();
        self.emit_diagnostics(&mut lock)
    }

    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }
}

/// メモリ上のテキストをチェックし、結果を保持した状態を返す
pub fn check_source(label: &str, source: &str, config: ScannerConfig) -> MonkeyResult<CheckState> {
    let mut state = CheckState::new_from_string(label, source.to_string());
    state.scan(config)?;
    Ok(state)
}
