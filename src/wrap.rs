//! Greedy line wrapping and missing-value normalization.

use crate::measure::TextMeasurer;
use crate::page::TextStyle;
use crate::units::Mm;

/// What every absent or blank field renders as, so that omissions are visible to
/// whoever reads the report instead of silently leaving a gap
pub const MISSING_PLACEHOLDER: &str = "N/A";

const TABSIZE: usize = 4;

/// Replace a missing, empty or whitespace-only value with [MISSING_PLACEHOLDER]
pub fn normalize(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => MISSING_PLACEHOLDER,
    }
}

/// Normalize `value` and break it into lines no wider than `max_width` using the
/// measurer's font metrics. Always returns at least one line.
pub fn wrap_text<M: TextMeasurer + ?Sized>(
    measurer: &M,
    value: Option<&str>,
    max_width: Mm,
    style: &TextStyle,
) -> Vec<String> {
    let lines = measurer.wrap_lines(normalize(value), max_width, style);
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Greedily wrap `text` so that no line is wider than `max_width`, where `width_of`
/// reports the rendered width of a string.
///
/// Explicit newlines always start a new line and an empty paragraph produces an empty
/// line. Words are packed onto the current line until the next one would overflow it.
/// A single word wider than the whole line is broken between characters, so the
/// result never exceeds `max_width` unless a lone character does.
pub fn wrap_greedy<F>(text: &str, max_width: Mm, width_of: F) -> Vec<String>
where
    F: Fn(&str) -> Mm,
{
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let space = width_of(" ");

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = Mm(0.0);

        for word in paragraph.split_whitespace() {
            let word_width = width_of(word);

            if !line.is_empty() && line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if word_width <= max_width {
                line.push_str(word);
                line_width = word_width;
            } else {
                // no break point in the word, split it between characters
                let mut pieces = break_word(word, max_width, &width_of);
                let tail = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                line_width = width_of(&tail);
                line = tail;
            }
        }

        lines.push(line);
    }

    lines
}

fn break_word<F>(word: &str, max_width: Mm, width_of: &F) -> Vec<String>
where
    F: Fn(&str) -> Mm,
{
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if width_of(&current) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    pieces.push(current);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    /// every character is 1mm wide
    fn unit_width(s: &str) -> Mm {
        Mm(s.chars().count() as f32)
    }

    #[test]
    fn missing_values_become_placeholder() {
        assert_eq!(normalize(None), "N/A");
        assert_eq!(normalize(Some("")), "N/A");
        assert_eq!(normalize(Some("  \t")), "N/A");
        assert_eq!(normalize(Some("open")), "open");
    }

    #[test]
    fn packs_words_greedily() {
        let lines = wrap_greedy("the quick brown fox jumps", Mm(10.0), unit_width);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn exact_fit_stays_on_one_line() {
        let lines = wrap_greedy("abcde fghi", Mm(10.0), unit_width);
        assert_eq!(lines, vec!["abcde fghi"]);
    }

    #[test]
    fn honours_explicit_newlines() {
        let lines = wrap_greedy("first\r\n\nthird", Mm(20.0), unit_width);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn breaks_overlong_words_between_characters() {
        let lines = wrap_greedy("ab abcdefghijkl cd", Mm(5.0), unit_width);
        assert_eq!(lines, vec!["ab", "abcde", "fghij", "kl cd"]);
        assert!(lines.iter().all(|l| unit_width(l) <= Mm(5.0)));
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_greedy("", Mm(5.0), unit_width), vec![""]);
    }
}
