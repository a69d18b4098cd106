use serde::{Deserialize, Serialize};

/// Line-splitting policy for the caption text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Hard break every N characters, mid-word splits allowed
    #[default]
    CharBreak,
    /// Greedy word packing, no word ever split, no hyphenation
    WordWrap,
}

/// Reflow `text` into lines of at most `max_chars` characters, joined by
/// `\n`. Counting is per `char`, not per byte. A `max_chars` of zero is
/// clamped to one so the engine never rejects input.
pub fn wrap_text(text: &str, max_chars: usize, mode: WrapMode) -> String {
    let max_chars = max_chars.max(1);
    match mode {
        WrapMode::CharBreak => char_break(text, max_chars),
        WrapMode::WordWrap => word_wrap(text, max_chars),
    }
}

fn char_break(text: &str, max_chars: usize) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / max_chars);
    for (i, ch) in text.chars().enumerate() {
        if i != 0 && i % max_chars == 0 {
            result.push('\n');
        }
        result.push(ch);
    }
    result
}

fn word_wrap(text: &str, max_chars: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        // +1 for the joining space
        let needed = if line_chars == 0 {
            word_chars
        } else {
            line_chars + 1 + word_chars
        };

        if needed > max_chars && line_chars > 0 {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }

        if line_chars > 0 {
            line.push(' ');
            line_chars += 1;
        }
        // An over-long word stands alone unbroken on its own line
        line.push_str(word);
        line_chars += word_chars;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_break_short_text_untouched() {
        assert_eq!(wrap_text("hello", 20, WrapMode::CharBreak), "hello");
    }

    #[test]
    fn char_break_splits_mid_word() {
        assert_eq!(wrap_text("abcdef", 4, WrapMode::CharBreak), "abcd\nef");
    }

    #[test]
    fn char_break_exact_multiple_has_no_trailing_newline() {
        assert_eq!(wrap_text("abcdefgh", 4, WrapMode::CharBreak), "abcd\nefgh");
    }

    #[test]
    fn char_break_counts_chars_not_bytes() {
        // Each char is multi-byte UTF-8
        assert_eq!(wrap_text("ééééé", 2, WrapMode::CharBreak), "éé\néé\né");
    }

    #[test]
    fn word_wrap_packs_greedily() {
        // 17 chars fit a 20-char budget on one line; a 12-char budget
        // forces the break after the second word
        assert_eq!(
            wrap_text("hello hello hello", 20, WrapMode::WordWrap),
            "hello hello hello"
        );
        assert_eq!(
            wrap_text("hello hello hello", 12, WrapMode::WordWrap),
            "hello hello\nhello"
        );
    }

    #[test]
    fn word_wrap_never_splits_words() {
        let wrapped = wrap_text("alpha beta gamma delta", 10, WrapMode::WordWrap);
        for line in wrapped.lines() {
            for word in line.split(' ') {
                assert!("alpha beta gamma delta".contains(word));
            }
        }
        assert_eq!(wrapped, "alpha beta\ngamma\ndelta");
    }

    #[test]
    fn word_wrap_overlong_word_stands_alone() {
        let wrapped = wrap_text("hi incomprehensibilities hi", 10, WrapMode::WordWrap);
        assert_eq!(wrapped, "hi\nincomprehensibilities\nhi");
    }

    #[test]
    fn empty_text_yields_empty_string() {
        assert_eq!(wrap_text("", 20, WrapMode::CharBreak), "");
        assert_eq!(wrap_text("", 20, WrapMode::WordWrap), "");
    }

    #[test]
    fn zero_width_is_clamped_not_rejected() {
        assert_eq!(wrap_text("ab", 0, WrapMode::CharBreak), "a\nb");
    }
}
