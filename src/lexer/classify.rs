//! コードポイントの分類

use crate::config::ScannerConfig;

/// トークン間で読み飛ばす空白
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// 2文字演算子 `!=` と `==` の先頭
pub fn is_pair_trigger(ch: char) -> bool {
    matches!(ch, '!' | '=')
}

/// `ch` が単語に含まれうるかどうか
///
/// 除外で定義する。空白・制御文字・予約記号以外はすべて単語の一部で、
/// 識別子にはどの文字体系も使える。
pub fn is_word_char(ch: char, config: &ScannerConfig) -> bool {
    !ch.is_whitespace() && !ch.is_control() && !config.is_reserved(ch)
}

/// `ch` が単語を始めるかどうか。数字は常に整数を始める
pub fn is_word_start(ch: char, config: &ScannerConfig) -> bool {
    is_word_char(ch, config) && !is_digit(ch)
}
