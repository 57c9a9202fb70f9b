//! ドロップペイロード解析モジュール
//!
//! ドラッグ＆ドロップやペーストで渡される「スペース区切り・
//! スペースを含むパスは `{ }` で囲む」形式の文字列を個々のパスに分解する。

/// ペイロード文字列をパスのリストに分解
///
/// - `{` で囲まれたトークンはスペースを含んでいても1つのパスとして扱う
/// - 囲まれていない部分はスペース区切り（連続スペースは空トークンを生まない）
/// - 出力順は入力順と同じ
pub fn parse_drop_payload(raw: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut token = String::new();
    let mut in_brace = false;

    for ch in raw.chars() {
        if ch == '{' && !in_brace {
            // 囲みトークンは常に空の状態から始める
            in_brace = true;
            token.clear();
        } else if ch == '}' && in_brace {
            in_brace = false;
            items.push(std::mem::take(&mut token));
        } else if ch == ' ' && !in_brace {
            if !token.is_empty() {
                items.push(std::mem::take(&mut token));
            }
        } else {
            token.push(ch);
        }
    }

    if !token.is_empty() {
        items.push(token);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_space_separated_paths() {
        assert_eq!(parse_drop_payload("a.jpg b.jpg"), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn keeps_braced_tokens_with_spaces_intact() {
        assert_eq!(
            parse_drop_payload("{a b.jpg} c.png"),
            vec!["a b.jpg", "c.png"]
        );
        assert_eq!(
            parse_drop_payload(r"{C:\a b\img.jpg} {C:\img2.jpg}"),
            vec![r"C:\a b\img.jpg", r"C:\img2.jpg"]
        );
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(parse_drop_payload(""), Vec::<String>::new());
    }

    #[test]
    fn repeated_and_leading_spaces_yield_no_empty_tokens() {
        assert_eq!(parse_drop_payload("  a.jpg   b.jpg "), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn empty_braced_token_is_emitted() {
        assert_eq!(parse_drop_payload("{} a.jpg"), vec!["", "a.jpg"]);
    }

    #[test]
    fn brace_discards_partial_token() {
        // 囲み開始までに溜まった断片は捨てられる
        assert_eq!(parse_drop_payload("ab{c d}"), vec!["c d"]);
    }
}
