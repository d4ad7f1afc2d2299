//! Greedy word wrap against the built-in font metrics.

use crate::fonts;

/// Splits `text` into lines no wider than `max_width` millimetres at
/// `font_size` points.
///
/// Explicit newlines always start a new line and runs of whitespace collapse
/// to a single space.  A word that is wider than a whole line is broken
/// between characters.  The result always holds at least one line, so empty
/// text still occupies one line of height.
pub fn wrap_text(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
    let fits = |candidate: &str| fonts::text_width(candidate, font_size) <= max_width;
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();

        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_owned()
            } else {
                format!("{current} {word}")
            };

            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if fits(word) {
                current.push_str(word);
            } else {
                // Overlong word: emit full-width chunks, keep the tail open.
                for c in word.chars() {
                    current.push(c);
                    if current.chars().count() > 1 && !fits(&current) {
                        current.pop();
                        lines.push(std::mem::replace(&mut current, c.to_string()));
                    }
                }
            }
        }

        lines.push(current);
    }

    lines
}
