//! トークン定義

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// Monkey言語のトークン種別
///
/// 種別から綴りが決まらないものだけがテキストを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // キーワード
    Else,
    False,
    Fn,
    If,
    Let,
    Return,
    True,

    // リテラル
    Identifier(String),
    Integer(String),

    // 演算子・区切り文字
    Assign,
    Asterisk,
    Bang,
    Comma,
    Equal,
    GreaterThan,
    NotEqual,
    LeftBrace,
    LeftParen,
    LessThan,
    Minus,
    Plus,
    RightBrace,
    RightParen,
    Semicolon,
    Slash,

    // 特殊
    Eof,
    Unknown(char),
}

/// 読み終えた単語をキーワード表から引く
///
/// 大文字小文字を区別した完全一致。
pub fn keyword_from_word(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "fn" => TokenKind::Fn,
        "if" => TokenKind::If,
        "let" => TokenKind::Let,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        _ => return None,
    };
    Some(kind)
}

/// 1コードポイントの記号を種別に変換
///
/// `!` と `=` も含む。後続の `=` と組むかどうかはスキャナが決める。
pub fn symbol_from_char(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '=' => TokenKind::Assign,
        '*' => TokenKind::Asterisk,
        '!' => TokenKind::Bang,
        ',' => TokenKind::Comma,
        '>' => TokenKind::GreaterThan,
        '{' => TokenKind::LeftBrace,
        '(' => TokenKind::LeftParen,
        '<' => TokenKind::LessThan,
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        '}' => TokenKind::RightBrace,
        ')' => TokenKind::RightParen,
        ';' => TokenKind::Semicolon,
        '/' => TokenKind::Slash,
        _ => return None,
    };
    Some(kind)
}

impl TokenKind {
    /// トークンが持つソーステキスト。固定の種別では空
    pub fn literal(&self) -> String {
        match self {
            TokenKind::Identifier(text) | TokenKind::Integer(text) => text.clone(),
            TokenKind::Unknown(ch) => ch.to_string(),
            _ => String::new(),
        }
    }

    /// 種別がテキストを持つかどうか
    pub fn has_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier(_) | TokenKind::Integer(_) | TokenKind::Unknown(_)
        )
    }

    /// トークンダンプで使うsnake_caseの種別名
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Let => "let",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Integer(_) => "integer",
            TokenKind::Assign => "assign",
            TokenKind::Asterisk => "asterisk",
            TokenKind::Bang => "bang",
            TokenKind::Comma => "comma",
            TokenKind::Equal => "equality",
            TokenKind::GreaterThan => "greater_than",
            TokenKind::NotEqual => "inequality",
            TokenKind::LeftBrace => "left_curly_brace",
            TokenKind::LeftParen => "left_parenthesis",
            TokenKind::LessThan => "less_than",
            TokenKind::Minus => "minus",
            TokenKind::Plus => "plus",
            TokenKind::RightBrace => "right_curly_brace",
            TokenKind::RightParen => "right_parenthesis",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Slash => "slash",
            TokenKind::Eof => "eof",
            TokenKind::Unknown(_) => "unknown",
        }
    }

    /// キーワードと記号の固定の綴り
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Let => "let",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::Assign => "=",
            TokenKind::Asterisk => "*",
            TokenKind::Bang => "!",
            TokenKind::Comma => ",",
            TokenKind::Equal => "==",
            TokenKind::GreaterThan => ">",
            TokenKind::NotEqual => "!=",
            TokenKind::LeftBrace => "{",
            TokenKind::LeftParen => "(",
            TokenKind::LessThan => "<",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::RightBrace => "}",
            TokenKind::RightParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Identifier(_)
            | TokenKind::Integer(_)
            | TokenKind::Eof
            | TokenKind::Unknown(_) => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "Identifier({})", name),
            TokenKind::Integer(digits) => write!(f, "Integer({})", digits),
            TokenKind::Unknown(ch) => write!(f, "Unknown({:?})", ch),
            TokenKind::Eof => write!(f, "EOF"),
            _ => write!(f, "'{}'", self.spelling().unwrap_or_default()),
        }
    }
}

/// トークンの開始位置
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub struct SourceLocation {
    /// ファイルパスまたはラベル。ラベルなしのメモリ入力では空
    pub file: String,
    /// 行番号（1始まり）
    pub line: usize,
    /// 列番号（1始まり、コードポイント単位）
    pub column: usize,
    /// 入力先頭からのバイトオフセット
    #[serde(skip)]
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset: 0,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

/// 位置情報付きトークン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn literal(&self) -> String {
        self.kind.literal()
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 3)?;
        state.serialize_field("kind", self.kind.name())?;
        state.serialize_field("literal", &self.kind.literal())?;
        state.serialize_field("location", &self.location)?;
        state.end()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind, self.location)
    }
}
