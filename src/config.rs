//! スキャナ設定
//!
//! 文法に依存する設定を保持する。列の計算に使うタブ幅と、単語を
//! 区切る予約コードポイントの集合。

use indexmap::IndexSet;

/// タブストップの既定の間隔（列数）
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// 固定のトークンを持つコードポイント。常に予約される
pub const SYMBOL_CODEPOINTS: [char; 14] = [
    '=', '*', '!', ',', '>', '{', '(', '<', '-', '+', '}', ')', ';', '/',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    tab_width: usize,
    reserved: IndexSet<char>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            reserved: SYMBOL_CODEPOINTS.into_iter().collect(),
        }
    }
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// タブストップの間隔を設定。0は1として扱う
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// 単語を区切るコードポイントを追加で予約
    ///
    /// トークンを持たない予約コードポイントは `Unknown` になる。
    pub fn reserve(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.reserved.extend(chars);
        self
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn is_reserved(&self, ch: char) -> bool {
        self.reserved.contains(&ch)
    }

    /// 追加順の予約コードポイント
    pub fn reserved(&self) -> impl Iterator<Item = char> + '_ {
        self.reserved.iter().copied()
    }
}
