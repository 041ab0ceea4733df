//! スキャナに文字を供給するソース
//!
//! ソースはコードポイントを1つずつ渡し、消費せずに次を覗ける。
//! `StrSource` はメモリ上のテキスト、`FileSource` はバッファ付きファイルから
//! UTF-8を直接デコードする。

use crate::error::{LexError, LexResult};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// スキャナにコードポイントを供給する
pub trait CharSource {
    /// 次のコードポイントを消費して返す。入力の終端では `None`
    fn read_next(&mut self) -> LexResult<Option<char>>;

    /// 次の `read_next` が返すコードポイント
    ///
    /// 入力が残っていなければ `LexError::PeekPastEnd`。呼び出し側は先に
    /// `is_exhausted` を確認する。
    fn peek_next(&mut self) -> LexResult<char>;

    /// `read_next` が `None` を返すかどうか
    fn is_exhausted(&mut self) -> LexResult<bool>;

    /// 下位のリソースを手放す。冪等でなければならない
    fn release(&mut self) {}

    /// 位置情報に出すファイルパスまたはラベル
    fn label(&self) -> &str {
        ""
    }
}

/// メモリ上のソース
#[derive(Debug, Clone)]
pub struct StrSource {
    text: String,
    position: usize,
    label: String,
}

impl StrSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_label(text, "")
    }

    pub fn with_label(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: 0,
            label: label.into(),
        }
    }

    fn next_char(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }
}

impl CharSource for StrSource {
    fn read_next(&mut self) -> LexResult<Option<char>> {
        let ch = self.next_char();
        if let Some(c) = ch {
            self.position += c.len_utf8();
        }
        Ok(ch)
    }

    fn peek_next(&mut self) -> LexResult<char> {
        self.next_char().ok_or(LexError::PeekPastEnd)
    }

    fn is_exhausted(&mut self) -> LexResult<bool> {
        Ok(self.position >= self.text.len())
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// UTF-8を逐次デコードするバッファ付きファイルソース
#[derive(Debug)]
pub struct FileSource {
    path: String,
    reader: Option<BufReader<File>>,
    lookahead: Option<char>,
    offset: usize,
}

impl FileSource {
    /// `path` を読み込み用に開く
    pub fn open(path: impl AsRef<Path>) -> LexResult<Self> {
        let path_str = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|source| LexError::Open {
            path: path_str.clone(),
            source,
        })?;
        log::debug!("opened character source {}", path_str);

        Ok(Self {
            path: path_str,
            reader: Some(BufReader::new(file)),
            lookahead: None,
            offset: 0,
        })
    }

    /// ファイルハンドルを保持しているかどうか
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    fn read_error(&self, source: io::Error) -> LexError {
        LexError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn invalid_utf8(&self) -> LexError {
        LexError::InvalidUtf8 {
            path: self.path.clone(),
            offset: self.offset,
        }
    }

    /// 1バイト読む。ファイル終端では `None`
    fn read_byte(&mut self) -> LexResult<Option<u8>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };
        let mut byte = [0u8; 1];
        let result = loop {
            match reader.read(&mut byte) {
                Ok(0) => break Ok(None),
                Ok(_) => break Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => break Err(e),
            }
        };
        result.map_err(|e| self.read_error(e))
    }

    /// 次のコードポイントをデコード
    fn decode(&mut self) -> LexResult<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead).ok_or_else(|| self.invalid_utf8())?;

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?.ok_or_else(|| self.invalid_utf8())?;
        }

        let ch = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| self.invalid_utf8())?;
        self.offset += width;
        Ok(Some(ch))
    }
}

/// UTF-8の先頭バイトが示すバイト長
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl CharSource for FileSource {
    fn read_next(&mut self) -> LexResult<Option<char>> {
        match self.lookahead.take() {
            Some(ch) => Ok(Some(ch)),
            None => self.decode(),
        }
    }

    fn peek_next(&mut self) -> LexResult<char> {
        if self.lookahead.is_none() {
            self.lookahead = self.decode()?;
        }
        self.lookahead.ok_or(LexError::PeekPastEnd)
    }

    fn is_exhausted(&mut self) -> LexResult<bool> {
        if self.lookahead.is_none() {
            self.lookahead = self.decode()?;
        }
        Ok(self.lookahead.is_none())
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            log::debug!("released character source {}", self.path);
        }
    }

    fn label(&self) -> &str {
        &self.path
    }
}
