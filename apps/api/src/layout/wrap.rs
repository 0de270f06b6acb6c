use crate::layout::font_metrics::measure_str;
use crate::render::visual::TextStyle;

/// Greedy word-wrap of `text` into lines no wider than `max_width`.
///
/// Whitespace runs collapse to one space. A word wider than the line on its own is
/// split at character boundaries. An empty or blank string yields no lines.
/// Candidate lines are measured whole, so kerning across word boundaries counts.
pub fn wrap_lines(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if measure_str(word, style) > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_word(word, style, max_width);
            // The last piece keeps accepting following words.
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure_str(&candidate, style) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits one word into pieces that fit `max_width`. A single character wider than
/// the line still gets a piece of its own.
fn split_word(word: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if measure_str(&piece, style) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::replace(&mut piece, c.to_string()));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::visual::palette;

    fn style() -> TextStyle {
        TextStyle::new(12, palette::SLATE_900)
    }

    #[test]
    fn test_wrap_empty_returns_no_lines() {
        assert!(wrap_lines("", &style(), 100.0).is_empty());
        assert!(wrap_lines("   \n ", &style(), 100.0).is_empty());
    }

    #[test]
    fn test_wrap_single_word_one_line() {
        assert_eq!(wrap_lines("Rust", &style(), 100.0), vec!["Rust"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        let two_words = measure_str("aaa bbb", &style());
        assert_eq!(
            wrap_lines("aaa bbb ccc", &style(), two_words),
            vec!["aaa bbb", "ccc"]
        );
        assert_eq!(
            wrap_lines("aaa bbb ccc", &style(), two_words - 0.5),
            vec!["aaa", "bbb", "ccc"]
        );
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_lines("a \n\t b", &style(), 100.0), vec!["a b"]);
    }

    #[test]
    fn test_overlong_word_is_split() {
        let limit = measure_str("abcd", &style());
        let lines = wrap_lines("abcdefghij k", &style(), limit);
        assert!(lines.len() >= 3, "{lines:?}");
        assert_eq!(lines.concat().replace(' ', ""), "abcdefghijk");
        for line in &lines {
            assert!(measure_str(line, &style()) <= limit, "{line}");
        }
    }

    #[test]
    fn test_wrapped_lines_never_exceed_width() {
        let text = "Zoë Ångström led the København office through a platform migration. ".repeat(6);
        for line in wrap_lines(&text, &style(), 180.0) {
            assert!(measure_str(&line, &style()) <= 180.0, "{line}");
        }
    }
}
