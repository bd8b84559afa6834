//! Human-readable differences between two texts.

use dissimilar::Chunk;
use owo_colors::OwoColorize;

/// Renders the difference between an original and a revised text.
pub trait DiffRenderer: Send + Sync {
    fn render(&self, original: &str, revised: &str) -> String;
}

/// Single-line inline diff built on `dissimilar` (diff-match-patch with
/// semantic cleanup).
///
/// Insertions are green and deletions red. Without colors, insertions are
/// wrapped in `{+ +}` and deletions in `[- -]`.
#[derive(Debug, Clone, Copy)]
pub struct InlineDiff {
    color: bool,
}

impl InlineDiff {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors unless disabled through the global output settings.
    pub fn from_output_config() -> Self {
        Self::new(!crate::output::is_no_color())
    }
}

impl DiffRenderer for InlineDiff {
    fn render(&self, original: &str, revised: &str) -> String {
        let mut rendered = String::with_capacity(original.len().max(revised.len()));
        for chunk in dissimilar::diff(original, revised) {
            match (chunk, self.color) {
                (Chunk::Equal(text), _) => rendered.push_str(text),
                (Chunk::Insert(text), true) => rendered.push_str(&text.green().to_string()),
                (Chunk::Delete(text), true) => rendered.push_str(&text.red().to_string()),
                (Chunk::Insert(text), false) => {
                    rendered.push_str("{+");
                    rendered.push_str(text);
                    rendered.push_str("+}");
                }
                (Chunk::Delete(text), false) => {
                    rendered.push_str("[-");
                    rendered.push_str(text);
                    rendered.push_str("-]");
                }
            }
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: InlineDiff = InlineDiff::new(false);

    #[test]
    fn test_identical_texts_render_unchanged() {
        assert_eq!(PLAIN.render("Hello world", "Hello world"), "Hello world");
    }

    #[test]
    fn test_pure_insertion() {
        assert_eq!(PLAIN.render("Hi", "Hi there"), "Hi{+ there+}");
    }

    #[test]
    fn test_pure_deletion() {
        assert_eq!(PLAIN.render("Hi there", "Hi"), "Hi[- there-]");
    }

    #[test]
    fn test_replacement_marks_both_sides() {
        let rendered = PLAIN.render("I will treat my wound.", "I will heal my wound.");
        assert!(rendered.starts_with("I will"));
        assert!(rendered.ends_with("my wound."));
        assert!(rendered.contains("[-"));
        assert!(rendered.contains("{+"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(PLAIN.render("", ""), "");
        assert_eq!(PLAIN.render("", "new"), "{+new+}");
    }

    #[test]
    fn test_colored_output_uses_ansi_escapes() {
        let rendered = InlineDiff::new(true).render("Hi", "Hi there");
        assert!(rendered.starts_with("Hi"));
        assert!(rendered.contains("\u{1b}[32m"));
        assert!(rendered.contains(" there"));
        assert!(!rendered.contains("{+"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = "The quick brown fox";
        let b = "A quick brown dog";
        assert_eq!(PLAIN.render(a, b), PLAIN.render(a, b));
    }
}
