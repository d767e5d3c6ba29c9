//! Lexical relevance ranking of chunks against a query.
//!
//! Used only when the full transcript would blow the answering model's
//! context budget. Scoring is a cheap token-overlap count, not a semantic
//! measure: a query token matches every chunk token that contains it as a
//! substring, case-insensitively.

use crate::chunking::Chunk;

/// Number of chunks to keep when the caller does not override it.
pub const DEFAULT_TOP_K: usize = 5;

/// A chunk paired with its relevance score. Transient: produced during
/// ranking, never stored.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub score: usize,
}

/// Score every chunk against the query, preserving chunk order.
///
/// The query is lowercased and split on whitespace; each chunk likewise.
/// A chunk's score is the number of its tokens containing any query token
/// as a substring, summed over query tokens (duplicate query tokens each
/// contribute).
pub fn score_chunks(query: &str, chunks: &[Chunk]) -> Vec<ScoredChunk> {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();

    chunks
        .iter()
        .map(|chunk| {
            let text = chunk.text.to_lowercase();
            let words: Vec<&str> = text.split_whitespace().collect();
            let score = terms
                .iter()
                .map(|term| words.iter().filter(|word| word.contains(*term)).count())
                .sum();
            ScoredChunk {
                chunk: chunk.clone(),
                score,
            }
        })
        .collect()
}

/// Return the `top_k` most relevant chunks, highest score first.
///
/// The sort is stable, so equally scored chunks keep their original
/// transcript order; repeated calls with the same input are bit-for-bit
/// identical. A query matching nothing yields the first `top_k` chunks
/// unchanged.
pub fn rank(query: &str, chunks: &[Chunk], top_k: usize) -> Vec<Chunk> {
    let mut scored = score_chunks(query, chunks);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_k);
    scored.into_iter().map(|s| s.chunk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(texts: &[&str]) -> Vec<Chunk> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Chunk::new(*t, i as i32))
            .collect()
    }

    #[test]
    fn test_substring_match_and_tie_order() {
        let chunks = chunks(&["I have a cat.", "dogs bark.", "nothing relevant."]);
        let ranked = rank("cat dog", &chunks, 2);

        // "cat" matches "cat." exactly-ish, "dog" matches inside "dogs";
        // both score 1, so original order decides.
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].text, "I have a cat.");
        assert_eq!(ranked[1].text, "dogs bark.");
    }

    #[test]
    fn test_higher_score_sorts_first() {
        let chunks = chunks(&["tea and toast.", "coffee coffee coffee.", "tea."]);
        let ranked = rank("coffee", &chunks, 3);
        assert_eq!(ranked[0].text, "coffee coffee coffee.");
    }

    #[test]
    fn test_scoring_is_case_insensitive() {
        let chunks = chunks(&["Rust is great."]);
        let scored = score_chunks("RUST", &chunks);
        assert_eq!(scored[0].score, 1);
    }

    #[test]
    fn test_duplicate_query_tokens_each_count() {
        let chunks = chunks(&["cat cat."]);
        let scored = score_chunks("cat cat", &chunks);
        assert_eq!(scored[0].score, 4);
    }

    #[test]
    fn test_no_matches_keeps_original_order() {
        let chunks = chunks(&["alpha.", "beta.", "gamma."]);
        let ranked = rank("zzz", &chunks, 5);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].text, "alpha.");
        assert_eq!(ranked[2].text, "gamma.");
    }

    #[test]
    fn test_result_length_is_bounded_by_top_k() {
        let chunks = chunks(&["a.", "b.", "c.", "d."]);
        assert_eq!(rank("a", &chunks, 2).len(), 2);
        assert_eq!(rank("a", &chunks, 10).len(), 4);
        assert!(rank("a", &chunks, 0).is_empty());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let chunks = chunks(&["cat dog.", "dog cat.", "bird."]);
        let first = rank("cat dog bird", &chunks, 3);
        let second = rank("cat dog bird", &chunks, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_chunks_rank_to_empty() {
        assert!(rank("anything", &[], 5).is_empty());
    }
}
