//! スキャナ本体

use std::path::Path;

use super::classify::{is_digit, is_pair_trigger, is_whitespace, is_word_char, is_word_start};
use super::position::Position;
use super::source::{CharSource, FileSource, StrSource};
use super::token::{keyword_from_word, symbol_from_char, SourceLocation, Token, TokenKind};
use crate::config::ScannerConfig;
use crate::error::{LexError, LexResult};

/// 文字ソースから1トークンずつ取り出すスキャナ
///
/// 先読みの1コードポイントとその位置を保持する。`next_token` は空白を
/// 読み飛ばしてちょうど1トークンを消費し、直後のコードポイントで止まる。
///
/// 一度 `Eof` を返すとソースを解放し、以降は同じ位置の `Eof` を返し続ける。
/// 致命的エラーの後は `LexError::Halted` を返し、途中から再開しない。
pub struct Scanner<S: CharSource = StrSource> {
    source: S,
    config: ScannerConfig,
    current: Option<char>,
    position: Position,
    eof_location: Option<SourceLocation>,
    failed: bool,
}

impl Scanner<StrSource> {
    /// ファイル名なしでメモリ上のテキストをスキャン
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, ScannerConfig::default())
    }

    /// `label` を位置情報のファイル名として報告する
    pub fn with_label(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self::primed(StrSource::with_label(text, label), ScannerConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: ScannerConfig) -> Self {
        Self::primed(StrSource::new(text), config)
    }

    fn primed(mut source: StrSource, config: ScannerConfig) -> Self {
        // メモリからの読み込みは失敗しない
        let current = source.read_next().unwrap_or(None);
        Self::from_parts(source, config, current)
    }
}

impl Scanner<FileSource> {
    /// `path` を開いて先読みを準備
    pub fn open(path: impl AsRef<Path>) -> LexResult<Self> {
        Self::open_with_config(path, ScannerConfig::default())
    }

    pub fn open_with_config(path: impl AsRef<Path>, config: ScannerConfig) -> LexResult<Self> {
        Self::with_source(FileSource::open(path)?, config)
    }
}

impl<S: CharSource> Scanner<S> {
    /// 任意の文字ソースからスキャナを作る
    pub fn with_source(mut source: S, config: ScannerConfig) -> LexResult<Self> {
        let current = source.read_next()?;
        Ok(Self::from_parts(source, config, current))
    }

    fn from_parts(source: S, config: ScannerConfig, current: Option<char>) -> Self {
        Self {
            source,
            config,
            current,
            position: Position::new(),
            eof_location: None,
            failed: false,
        }
    }

    /// 次のトークンをスキャン
    pub fn next_token(&mut self) -> LexResult<Token> {
        if let Some(location) = &self.eof_location {
            return Ok(Token::new(TokenKind::Eof, location.clone()));
        }
        if self.failed {
            return Err(LexError::Halted);
        }

        let result = self.scan_token();
        if let Err(e) = &result {
            log::debug!("scanner halted at {}: {}", self.location(), e);
            self.failed = true;
        }
        result
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        self.skip_whitespace()?;
        let location = self.location();

        let Some(ch) = self.current else {
            self.source.release();
            self.eof_location = Some(location.clone());
            log::trace!("EOF @ {}", location);
            return Ok(Token::new(TokenKind::Eof, location));
        };

        let kind = if is_word_start(ch, &self.config) {
            self.scan_word()?
        } else if is_digit(ch) {
            TokenKind::Integer(self.scan_while(|c, _| is_digit(c))?)
        } else if is_pair_trigger(ch) {
            self.scan_pair(ch)?
        } else {
            self.bump()?;
            symbol_from_char(ch).unwrap_or(TokenKind::Unknown(ch))
        };

        let token = Token::new(kind, location);
        log::trace!("{}", token);
        Ok(token)
    }

    /// 先読みコードポイントの位置
    pub fn location(&self) -> SourceLocation {
        SourceLocation {
            file: self.source.label().to_string(),
            line: self.position.line,
            column: self.position.column,
            offset: self.position.offset,
        }
    }

    /// `Eof` を返し済みかどうか
    pub fn is_finished(&self) -> bool {
        self.eof_location.is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 先読みを消費して次を読む
    fn bump(&mut self) -> LexResult<()> {
        if let Some(ch) = self.current {
            self.position.advance(ch, self.config.tab_width());
            self.current = self.source.read_next()?;
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) -> LexResult<()> {
        while self.current.is_some_and(is_whitespace) {
            self.bump()?;
        }
        Ok(())
    }

    /// `accept` が受け付ける最長の並びを消費
    fn scan_while(&mut self, accept: fn(char, &ScannerConfig) -> bool) -> LexResult<String> {
        let mut text = String::new();
        while let Some(ch) = self.current {
            if !accept(ch, &self.config) {
                break;
            }
            text.push(ch);
            self.bump()?;
        }
        Ok(text)
    }

    fn scan_word(&mut self) -> LexResult<TokenKind> {
        let word = self.scan_while(is_word_char)?;
        Ok(keyword_from_word(&word).unwrap_or(TokenKind::Identifier(word)))
    }

    /// `!` / `=` と、続く `=`
    fn scan_pair(&mut self, trigger: char) -> LexResult<TokenKind> {
        let paired = !self.source.is_exhausted()? && self.source.peek_next()? == '=';
        self.bump()?;
        if paired {
            self.bump()?;
        }

        let kind = match (trigger, paired) {
            ('!', true) => TokenKind::NotEqual,
            ('!', false) => TokenKind::Bang,
            (_, true) => TokenKind::Equal,
            (_, false) => TokenKind::Assign,
        };
        Ok(kind)
    }
}

/// 最初の `Eof` までのトークンを返す
///
/// 致命的エラーの後は止まる。
impl<S: CharSource> Iterator for Scanner<S> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_finished() {
            return None;
        }
        Some(self.next_token())
    }
}
