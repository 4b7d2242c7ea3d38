/// Grouping sentences into steps
///
/// Steps are fixed-size runs of consecutive sentences, joined with a
/// single space. N sentences produce ceil(N / 5) steps.

/// How many sentences go into one step
pub const SENTENCES_PER_STEP: usize = 5;

/// Group sentences into step strings, preserving order.
///
/// The last step may hold fewer than [`SENTENCES_PER_STEP`] sentences;
/// an empty input yields no steps.
pub fn group_into_steps(sentences: &[String]) -> Vec<String> {
    sentences
        .chunks(SENTENCES_PER_STEP)
        .map(|chunk| chunk.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Sentence {}.", i)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(group_into_steps(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_fewer_than_five_is_one_step() {
        let steps = group_into_steps(&numbered(3));
        assert_eq!(steps, vec!["Sentence 1. Sentence 2. Sentence 3."]);
    }

    #[test]
    fn test_exactly_five_is_one_step() {
        let steps = group_into_steps(&numbered(5));
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_eleven_sentences_split_five_five_one() {
        let steps = group_into_steps(&numbered(11));
        assert_eq!(steps.len(), 3);

        assert!(steps[0].starts_with("Sentence 1."));
        assert!(steps[0].ends_with("Sentence 5."));
        assert!(steps[1].starts_with("Sentence 6."));
        assert!(steps[1].ends_with("Sentence 10."));
        assert_eq!(steps[2], "Sentence 11.");
    }

    #[test]
    fn test_step_count_is_ceiling() {
        for n in 0..=20 {
            let steps = group_into_steps(&numbered(n));
            assert_eq!(steps.len(), n.div_ceil(SENTENCES_PER_STEP));
        }
    }
}
