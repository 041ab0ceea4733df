//! 行と列の管理

/// 先読みコードポイントの位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// 消費した1コードポイント分だけ進める
    ///
    /// タブは次のタブストップへ進み、CRは列を変えない。
    /// それ以外のコードポイントは1列。
    pub fn advance(&mut self, ch: char, tab_width: usize) {
        self.offset += ch.len_utf8();
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\r' => {}
            '\t' => self.column = next_tab_stop(self.column, tab_width),
            _ => self.column += 1,
        }
    }
}

/// `column` にあるタブが進む先の列（1始まり）
pub fn next_tab_stop(column: usize, tab_width: usize) -> usize {
    let width = tab_width.max(1);
    column + (width - ((column - 1) % width))
}
