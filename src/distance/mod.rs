//! Character-level edit distance.

/// Levenshtein distance between `a` and `b`, counted in Unicode scalar values.
///
/// Insertions, deletions, and substitutions each cost `1`. Uses a two-row table, so memory
/// is `O(len(b))`.
///
/// ```
/// use recite::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = b.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// `levenshtein(expected, candidate) / max(1, len(expected))`.
///
/// May exceed `1.0` when `candidate` is much longer than `expected`.
pub fn normalized_distance(expected: &str, candidate: &str) -> f64 {
    let len = expected.chars().count().max(1);
    levenshtein(expected, candidate) as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["", "a", "cat", "cot", "coat", "kitten", "sitting", "über", "uber"];

    #[test]
    fn test_identity_is_zero() {
        for w in WORDS {
            assert_eq!(levenshtein(w, w), 0);
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("cat", "cot"), 1);
        assert_eq!(levenshtein("cat", "coat"), 1);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("über", "uber"), 1);
        assert_eq!(levenshtein("日本", "日"), 1);
    }

    #[test]
    fn test_symmetric() {
        for a in WORDS {
            for b in WORDS {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        for a in WORDS {
            for b in WORDS {
                for c in WORDS {
                    assert!(levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c));
                }
            }
        }
    }

    #[test]
    fn test_normalized_distance() {
        assert!((normalized_distance("cat", "cot") - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(normalized_distance("cat", "cat"), 0.0);
        assert_eq!(normalized_distance("", "ab"), 2.0);
        assert_eq!(normalized_distance("a", "xyz"), 3.0);
    }
}
