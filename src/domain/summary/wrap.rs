//! Word-count based line wrapping.

/// Words per wrapped summary line.
pub const WORDS_PER_LINE: usize = 12;

/// Wraps `text` into lines bounded by word count, not character width.
///
/// A line is closed after the word at 0-based index `i` whenever
/// `i > 0 && i % words_per_line == 0`. The first line therefore carries
/// `words_per_line + 1` words and every later one `words_per_line`.
/// Words after the last boundary are dropped, so a summary shorter than
/// `words_per_line + 1` words produces no lines at all.
pub fn wrap_words(text: &str, words_per_line: usize) -> Vec<String> {
    if words_per_line == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, word) in text.split_whitespace().enumerate() {
        current.push(word);
        if i > 0 && i % words_per_line == 0 {
            lines.push(current.join(" "));
            current.clear();
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn twenty_five_words_make_two_lines() {
        let lines = wrap_words(&words(25), WORDS_PER_LINE);
        assert_eq!(
            lines,
            vec![
                "w0 w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12".to_string(),
                "w13 w14 w15 w16 w17 w18 w19 w20 w21 w22 w23 w24".to_string(),
            ]
        );
    }

    #[test]
    fn single_word_makes_no_lines() {
        assert!(wrap_words("Short", WORDS_PER_LINE).is_empty());
    }

    #[test]
    fn trailing_partial_line_is_dropped() {
        let lines = wrap_words(&words(30), WORDS_PER_LINE);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("w24"));
    }

    #[test]
    fn thirteen_words_fill_the_first_line_exactly() {
        let lines = wrap_words(&words(13), WORDS_PER_LINE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].split(' ').count(), 13);
    }

    #[test]
    fn twelve_words_make_no_lines() {
        assert!(wrap_words(&words(12), WORDS_PER_LINE).is_empty());
    }

    #[test]
    fn runs_of_whitespace_do_not_count_as_words() {
        let text = format!("  {}\n\n", words(13).replace(' ', " \t "));
        let lines = wrap_words(&text, WORDS_PER_LINE);
        assert_eq!(lines, vec![words(13)]);
    }

    #[test]
    fn empty_text_makes_no_lines() {
        assert!(wrap_words("", WORDS_PER_LINE).is_empty());
    }
}
