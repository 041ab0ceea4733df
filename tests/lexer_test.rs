//! レキサーテスト
//!
//! Monkeyスキャナのトークン列を種別・リテラル・行・列まで検証し、
//! どの入力でも成り立つトークン列全体の性質も確かめる。

#[cfg(test)]
mod tests {
    use monkeylex::lexer::{tokenize, Scanner, Token, TokenKind};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// トークンを `(種別名, リテラル, 行, 列)` に平坦化するヘルパー関数
    fn extract(source: &str) -> Vec<(&'static str, String, usize, usize)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind.name(), t.literal(), t.line(), t.column()))
            .collect()
    }

    fn row(kind: &'static str, literal: &str, line: usize, column: usize) -> (&'static str, String, usize, usize) {
        (kind, literal.to_string(), line, column)
    }

    #[test]
    fn test_program() {
        let source = "=+(){},;
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
";
        let expected = vec![
            row("assign", "", 1, 1),
            row("plus", "", 1, 2),
            row("left_parenthesis", "", 1, 3),
            row("right_parenthesis", "", 1, 4),
            row("left_curly_brace", "", 1, 5),
            row("right_curly_brace", "", 1, 6),
            row("comma", "", 1, 7),
            row("semicolon", "", 1, 8),
            row("let", "", 2, 1),
            row("identifier", "five", 2, 5),
            row("assign", "", 2, 10),
            row("integer", "5", 2, 12),
            row("semicolon", "", 2, 13),
            row("let", "", 3, 1),
            row("identifier", "ten", 3, 5),
            row("assign", "", 3, 9),
            row("integer", "10", 3, 11),
            row("semicolon", "", 3, 13),
            row("let", "", 5, 1),
            row("identifier", "add", 5, 5),
            row("assign", "", 5, 9),
            row("fn", "", 5, 11),
            row("left_parenthesis", "", 5, 13),
            row("identifier", "x", 5, 14),
            row("comma", "", 5, 15),
            row("identifier", "y", 5, 17),
            row("right_parenthesis", "", 5, 18),
            row("left_curly_brace", "", 5, 20),
            row("identifier", "x", 6, 3),
            row("plus", "", 6, 5),
            row("identifier", "y", 6, 7),
            row("semicolon", "", 6, 8),
            row("right_curly_brace", "", 7, 1),
            row("semicolon", "", 7, 2),
            row("let", "", 9, 1),
            row("identifier", "result", 9, 5),
            row("assign", "", 9, 12),
            row("identifier", "add", 9, 14),
            row("left_parenthesis", "", 9, 17),
            row("identifier", "five", 9, 18),
            row("comma", "", 9, 22),
            row("identifier", "ten", 9, 24),
            row("right_parenthesis", "", 9, 27),
            row("semicolon", "", 9, 28),
            row("eof", "", 10, 1),
        ];

        assert_eq!(extract(source), expected);
    }

    #[test]
    fn test_let_statement() {
        assert_eq!(
            extract("let five = 5;\n"),
            vec![
                row("let", "", 1, 1),
                row("identifier", "five", 1, 5),
                row("assign", "", 1, 10),
                row("integer", "5", 1, 12),
                row("semicolon", "", 1, 13),
                row("eof", "", 2, 1),
            ]
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            extract("10 == 10;"),
            vec![
                row("integer", "10", 1, 1),
                row("equality", "", 1, 4),
                row("integer", "10", 1, 7),
                row("semicolon", "", 1, 9),
                row("eof", "", 1, 10),
            ]
        );
    }

    #[test]
    fn test_inequality() {
        assert_eq!(
            extract("10 != 9;"),
            vec![
                row("integer", "10", 1, 1),
                row("inequality", "", 1, 4),
                row("integer", "9", 1, 7),
                row("semicolon", "", 1, 8),
                row("eof", "", 1, 9),
            ]
        );
    }

    #[test]
    fn test_operators_and_keywords() {
        let source = "!-/*5;
5 < 10 > 5;

if (5 < 10) {
	return true;
} else {
	return false;
}
";
        let kinds: Vec<_> = tokenize(source).into_iter().map(|t| t.kind.name()).collect();
        assert_eq!(
            kinds,
            vec![
                "bang", "minus", "slash", "asterisk", "integer", "semicolon",
                "integer", "less_than", "integer", "greater_than", "integer", "semicolon",
                "if", "left_parenthesis", "integer", "less_than", "integer",
                "right_parenthesis", "left_curly_brace",
                "return", "true", "semicolon",
                "right_curly_brace", "else", "left_curly_brace",
                "return", "false", "semicolon",
                "right_curly_brace", "eof",
            ]
        );
    }

    #[test]
    fn test_tab_indented_return_column() {
        let tokens = tokenize("if (x) {\n\treturn true;\n}");
        let ret = tokens.iter().find(|t| t.kind == TokenKind::Return).unwrap();
        assert_eq!((ret.line(), ret.column()), (2, 5));
    }

    #[test_case("\tx", 5 ; "tab at column one")]
    #[test_case("   \tx", 5 ; "tab at column four")]
    #[test_case("    \tx", 9 ; "tab at column five")]
    #[test_case("\t\tx", 9 ; "two tabs")]
    #[test_case(" \t x", 6 ; "space tab space")]
    fn test_tab_columns(source: &str, column: usize) {
        let tokens = tokenize(source);
        assert_eq!(tokens[0].kind, TokenKind::Identifier("x".to_string()));
        assert_eq!(tokens[0].column(), column);
    }

    #[test]
    fn test_unicode_identifier_columns() {
        assert_eq!(
            extract("let 猫 = 2;"),
            vec![
                row("let", "", 1, 1),
                row("identifier", "猫", 1, 5),
                row("assign", "", 1, 7),
                row("integer", "2", 1, 9),
                row("semicolon", "", 1, 10),
                row("eof", "", 1, 11),
            ]
        );
    }

    #[test]
    fn test_multi_script_identifiers() {
        assert_eq!(
            extract("let café_2 = größe + ねこ日和;"),
            vec![
                row("let", "", 1, 1),
                row("identifier", "café_2", 1, 5),
                row("assign", "", 1, 12),
                row("identifier", "größe", 1, 14),
                row("plus", "", 1, 20),
                row("identifier", "ねこ日和", 1, 22),
                row("semicolon", "", 1, 26),
                row("eof", "", 1, 27),
            ]
        );
    }

    #[test]
    fn test_integer_followed_by_word() {
        assert_eq!(
            extract("5x 0042"),
            vec![
                row("integer", "5", 1, 1),
                row("identifier", "x", 1, 2),
                row("integer", "0042", 1, 4),
                row("eof", "", 1, 8),
            ]
        );
    }

    #[test]
    fn test_unknown_carries_codepoint() {
        assert_eq!(
            extract("a\u{0}b"),
            vec![
                row("identifier", "a", 1, 1),
                row("unknown", "\u{0}", 1, 2),
                row("identifier", "b", 1, 3),
                row("eof", "", 1, 4),
            ]
        );
    }

    fn assert_stream_properties(source: &str) {
        let tokens: Vec<Token> = tokenize(source);

        // Eofはちょうど1つで末尾にある
        assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        assert!(tokens.last().unwrap().is_eof());

        // リテラルはテキストを持つ種別だけにある
        for token in &tokens[..tokens.len() - 1] {
            assert_eq!(!token.literal().is_empty(), token.kind.has_literal(), "{}", token);
        }

        // 行は戻らず、列が戻るのは改行をまたぐときだけ
        for pair in tokens.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(b.line() >= a.line());
            if b.line() == a.line() {
                assert!(b.column() > a.column(), "{} then {}", a, b);
            }
        }

        // 綴りとリテラルをつなぐと空白を除いた入力に一致する
        let rebuilt: String = tokens
            .iter()
            .map(|t| t.kind.spelling().map(str::to_string).unwrap_or_else(|| t.literal()))
            .collect();
        let stripped: String = source.chars().filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r')).collect();
        assert_eq!(rebuilt, stripped);
    }

    #[test_case("" ; "empty")]
    #[test_case("   \n\t \r\n" ; "whitespace only")]
    #[test_case("let add = fn(x, y) { x + y; };" ; "function literal")]
    #[test_case("!!==!=== <><>" ; "operator soup")]
    #[test_case("x\u{1}y\u{a0}z\u{3000}" ; "control and unicode spaces")]
    #[test_case("let 猫 = \"meow\"; # comment?" ; "unreserved punctuation")]
    #[test_case("\r\n\r\n  if(a!=b){return 1}" ; "crlf lines")]
    fn test_stream_properties(source: &str) {
        assert_stream_properties(source);
    }

    #[test]
    fn test_eof_repeats_at_same_position() {
        let mut scanner = Scanner::new("let x = 1;\n\n");
        let mut last = scanner.next_token().unwrap();
        while !last.is_eof() {
            last = scanner.next_token().unwrap();
        }
        assert_eq!((last.line(), last.column()), (3, 1));
        for _ in 0..5 {
            assert_eq!(scanner.next_token().unwrap(), last);
        }
    }
}
