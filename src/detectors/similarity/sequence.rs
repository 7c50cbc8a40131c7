//! Character-sequence similarity ratio.
//!
//! The classic Ratcliff/Obershelp measure: find the longest contiguous
//! matching block, recurse on the pieces to the left and right of it, and
//! report `2 * M / T` where `M` is the total matched length and `T` the
//! combined length of both sequences.

use std::collections::HashMap;

use crate::core::errors::Result;

use super::SimilarityMetric;

/// Longest-matching-block similarity over character sequences.
pub struct SequenceMetric;

impl SimilarityMetric for SequenceMetric {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn similarity(&self, text1: &str, text2: &str) -> Result<f64> {
        Ok(ratio(text1, text2))
    }
}

/// Similarity ratio `2 * M / T` between two strings.
///
/// Operands are put in a canonical order before matching; the greedy block
/// search is order-sensitive for a handful of inputs and the reported score
/// must not depend on which side a translation happened to land on.
pub fn ratio(text1: &str, text2: &str) -> f64 {
    let (left, right) = if text1 <= text2 {
        (text1, text2)
    } else {
        (text2, text1)
    };
    let a: Vec<char> = left.chars().collect();
    let b: Vec<char> = right.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matched_len(&a, &b) as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_len(a: &[char], b: &[char]) -> usize {
    // index of every position each char occupies in b, ascending
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        positions.entry(ch).or_default().push(j);
    }

    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, &positions, alo, ahi, blo, bhi);
        if size > 0 {
            matched += size;
            queue.push((alo, i, blo, j));
            queue.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest matching block within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)` with the earliest `i`, then earliest `j`, among
/// blocks of maximal size.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // j2len[j] = length of the match ending at a[i], b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_j2len = HashMap::new();
        if let Some(js) = positions.get(ch) {
            for &j in js {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let run = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_j2len.insert(j, run);
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            }
        }
        j2len = next_j2len;
    }
    best
}
