//! Sentence segmentation on terminal punctuation.

fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split text into sentences at terminal punctuation (`.`, `!`, `?`).
///
/// Each sentence keeps its terminator(s) and is trimmed; a run of
/// terminators ("Wait...") stays attached to its sentence. A trailing
/// fragment with no terminator is its own sentence, so text with no
/// boundaries at all comes back as a single sentence. Whitespace-only
/// input yields an empty list.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if is_terminal(chars[i]) {
            // Absorb the whole terminator run into this sentence.
            while i + 1 < chars.len() && is_terminal(chars[i + 1]) {
                i += 1;
            }
            let sentence: String = chars[start..=i].iter().collect();
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = i + 1;
        }
        i += 1;
    }

    let tail: String = chars[start..].iter().collect();
    let tail = tail.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}
