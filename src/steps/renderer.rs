// Step view formatting
//
// The display transform labels each step "Step N:" and puts every
// sentence on its own line. Lines are recovered by re-splitting the
// joined step text on literal ". " and re-appending a period to every
// fragment. That second split is coarser than the sentence splitter
// on purpose: a fragment that already ends in punctuation picks up an
// extra '.', and a step ending in ". " produces a line holding only
// '.'. The stored text is recovered by deleting the labels, so an
// edit cycle is not byte-identical to the original text.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a step label line: "Step 3:\n"
fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Step \d+:\n").expect("step label pattern is valid"))
}

/// Format steps for display.
///
/// Each step becomes a "Step {i}:" header, one line per fragment with
/// a trailing period, and a blank separator line.
pub fn render_steps(steps: &[String]) -> String {
    let mut rendered = String::new();

    for (i, step) in steps.iter().enumerate() {
        rendered.push_str("Step ");
        rendered.push_str(&(i + 1).to_string());
        rendered.push_str(":\n");

        for fragment in step.split(". ") {
            rendered.push_str(fragment);
            rendered.push_str(".\n");
        }

        rendered.push('\n');
    }

    rendered
}

/// Remove every "Step N:" label line from rendered text.
///
/// This is what goes back into the recipe's cooking process field on
/// save; the per-line layout and blank separators are kept.
pub fn strip_step_labels(rendered_text: &str) -> String {
    label_pattern().replace_all(rendered_text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_steps(&[]), "");
    }

    #[test]
    fn test_render_single_step() {
        let rendered = render_steps(&steps(&["Boil water. Add salt."]));
        assert_eq!(rendered, "Step 1:\nBoil water.\nAdd salt..\n\n");
    }

    #[test]
    fn test_render_numbers_steps_from_one() {
        let rendered = render_steps(&steps(&["First part", "Second part"]));
        assert_eq!(rendered, "Step 1:\nFirst part.\n\nStep 2:\nSecond part.\n\n");
    }

    #[test]
    fn test_render_doubles_trailing_period() {
        // "Serve hot." has no ". " boundary, so the whole fragment gets
        // another period appended.
        let rendered = render_steps(&steps(&["Serve hot."]));
        assert_eq!(rendered, "Step 1:\nServe hot..\n\n");
    }

    #[test]
    fn test_render_trailing_period_space_yields_bare_period_line() {
        let rendered = render_steps(&steps(&["Stir. "]));
        // "Stir. " splits into "Stir" and an empty trailing fragment,
        // which renders as a line holding only a period.
        assert_eq!(rendered, "Step 1:\nStir.\n.\n\n");
    }

    #[test]
    fn test_strip_removes_all_labels() {
        let rendered = "Step 1:\nBoil water.\n\nStep 2:\nServe hot..\n\n";
        let stored = strip_step_labels(rendered);
        assert_eq!(stored, "Boil water.\n\nServe hot..\n\n");
    }

    #[test]
    fn test_strip_handles_multi_digit_labels() {
        let rendered = "Step 12:\nKeep going.\n\n";
        assert_eq!(strip_step_labels(rendered), "Keep going.\n\n");
    }

    #[test]
    fn test_strip_leaves_inline_step_text_alone() {
        // Only label lines are removed, not the word "Step" in prose.
        let rendered = "Step 1:\nThis Step 2 matters.\n\n";
        assert_eq!(strip_step_labels(rendered), "This Step 2 matters.\n\n");
    }

    #[test]
    fn test_strip_is_stable_without_labels() {
        let plain = "Boil water.\nServe hot.\n";
        assert_eq!(strip_step_labels(plain), plain);
    }
}
