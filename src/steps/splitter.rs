// Sentence boundary detection
//
// A sentence ends at '!' or '?', or at a '.' that is followed by
// whitespace or end-of-input. A '.' glued to the next character does
// not split, which keeps decimals ("3.14") and abbreviations intact.

/// Split raw text into trimmed sentences in source order.
///
/// Empty input yields an empty list. Text with no terminal punctuation
/// degrades to a single sentence covering the whole remainder.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut sentences = Vec::new();

    let mut i = 0;
    while i < len {
        // A sentence starts at the first character that is neither
        // whitespace nor a leftover terminator.
        if chars[i].is_whitespace() || is_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = len;
        while i < len {
            let c = chars[i];
            if c == '!' || c == '?' {
                end = i + 1;
                break;
            }
            if c == '.' && chars.get(i + 1).map_or(true, |next| next.is_whitespace()) {
                end = i + 1;
                break;
            }
            i += 1;
        }

        let sentence: String = chars[start..end].iter().collect();
        let sentence = sentence.trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }

        i = end;
    }

    sentences
}

fn is_terminator(c: char) -> bool {
    c == '.' || c == '!' || c == '?'
}
