//! String similarity scoring.
//!
//! The default metric counts characters in matching blocks found by a greedy
//! longest-common-substring decomposition (Ratcliff/Obershelp) and reports
//! `2 * M / (len(a) + len(b))`. Existing score thresholds (the 0.35 weak
//! document threshold, the 0.995 early exit) are calibrated against it.
//!
//! When the second sequence has at least [`POPULAR_MIN_LEN`] chars, chars
//! occurring in more than 1% of its positions are left out of the index;
//! blocks found without them are then extended over equal neighbours. This
//! keeps page-length scores from being inflated by spaces and common letters.

use std::cmp::Ordering;
use std::collections::HashMap;

use rapidfuzz::distance::indel;
use serde::{Deserialize, Serialize};

/// Length from which frequent chars of the second sequence are not indexed.
pub const POPULAR_MIN_LEN: usize = 200;

/// Which similarity measure the engine uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMetric {
    /// Matched-block ratio (Ratcliff/Obershelp).
    #[default]
    BlockMatching,
    /// Normalized InDel similarity (`1 - indel / (len a + len b)`).
    Indel,
}

impl SimilarityMetric {
    /// Scores two char sequences, returning 0.0 when either is empty.
    pub fn score(self, a: &[char], b: &[char]) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        match self {
            Self::BlockMatching => block_ratio(a, b),
            Self::Indel => indel::normalized_similarity(a.iter().copied(), b.iter().copied()),
        }
    }

    /// Scores two strings, returning 0.0 when either is empty.
    pub fn score_str(self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.score(&a, &b)
    }
}

/// Matched-block similarity of two strings, in [0, 1].
pub fn similarity(a: &str, b: &str) -> f64 {
    SimilarityMetric::BlockMatching.score_str(a, b)
}

fn block_ratio(a: &[char], b: &[char]) -> f64 {
    // Canonical argument order keeps tie-breaking (and so the score) symmetric.
    let matched = match a.cmp(b) {
        Ordering::Greater => matched_chars(b, a),
        _ => matched_chars(a, b),
    };
    (2 * matched) as f64 / (a.len() + b.len()) as f64
}

/// Total size of the matching blocks between `a` and `b`.
pub fn matched_chars(a: &[char], b: &[char]) -> usize {
    let b2j = index_positions(b);
    let mut finder = LongestMatch::new(a, b, &b2j);
    let mut total = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = finder.find(alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }
    total
}

/// Positions of each char of `b`, without the popular ones on long inputs.
fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b2j.entry(*ch).or_default().push(j);
    }
    if b.len() >= POPULAR_MIN_LEN {
        let limit = b.len() / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= limit);
    }
    b2j
}

/// Longest common block search over index ranges, reusing its scratch rows.
struct LongestMatch<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: &'a HashMap<char, Vec<usize>>,
    // Row `r[j + 1]` holds the length of the match ending at `b[j]`.
    lengths: Vec<usize>,
    next_lengths: Vec<usize>,
    touched: Vec<usize>,
    next_touched: Vec<usize>,
}

impl<'a> LongestMatch<'a> {
    fn new(a: &'a [char], b: &'a [char], b2j: &'a HashMap<char, Vec<usize>>) -> Self {
        Self {
            a,
            b,
            b2j,
            lengths: vec![0; b.len() + 1],
            next_lengths: vec![0; b.len() + 1],
            touched: Vec::new(),
            next_touched: Vec::new(),
        }
    }

    /// Earliest longest block `a[i..i+k] == b[j..j+k]` inside the ranges,
    /// grown over equal chars the index leaves out.
    fn find(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
        for i in alo..ahi {
            self.next_touched.clear();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = self.lengths[j] + 1;
                    self.next_lengths[j + 1] = k;
                    self.next_touched.push(j + 1);
                    if k > best_k {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_k = k;
                    }
                }
            }
            for &slot in &self.touched {
                self.lengths[slot] = 0;
            }
            std::mem::swap(&mut self.lengths, &mut self.next_lengths);
            std::mem::swap(&mut self.touched, &mut self.next_touched);
        }
        for &slot in &self.touched {
            self.lengths[slot] = 0;
        }
        self.touched.clear();

        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_k += 1;
        }
        while best_i + best_k < ahi
            && best_j + best_k < bhi
            && self.a[best_i + best_k] == self.b[best_j + best_k]
        {
            best_k += 1;
        }
        (best_i, best_j, best_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("patta", "patta"), 1.0);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn single_deletion_ratio() {
        // 10 matched chars out of 11 + 10.
        let score = similarity("quick brown", "qick brown");
        assert!((score - 20.0 / 21.0).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn block_decomposition_recurses_on_both_sides() {
        // "abxcd" vs "abcd": blocks "ab" and "cd".
        assert_eq!(matched_chars(&chars("abxcd"), &chars("abcd")), 4);
        // Longest block "bcd"; the leftover "a"s sit on opposite sides of it.
        assert_eq!(matched_chars(&chars("abcd"), &chars("bcdxa")), 3);
    }

    #[test]
    fn counts_multibyte_chars_once() {
        let score = similarity("பட்டா", "பட்டா எண்");
        let expected = 2.0 * 5.0 / (5.0 + 9.0);
        assert!((score - expected).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn finder_rows_are_clean_between_searches() {
        let a = chars("aaaa");
        let b = chars("aaaa");
        let b2j = index_positions(&b);
        let mut finder = LongestMatch::new(&a, &b, &b2j);
        assert_eq!(finder.find(0, 4, 0, 4), (0, 0, 4));
        assert_eq!(finder.find(2, 4, 0, 1), (2, 0, 1));
        assert_eq!(finder.find(0, 2, 2, 4), (0, 2, 2));
    }

    const PAGE: &str = "Village Register Extract Sheet 14 Owner name recorded as Meenakshi Sundaram \
        residing at door number 27 east street with survey number 118 subdivision 3 \
        measuring two acres and forty cents classified as wet land irrigated by the \
        tank channel and the revenue assessment paid in full for the current fasli year";

    #[test]
    fn long_page_does_not_index_frequent_chars() {
        let page = chars(PAGE);
        assert_eq!(page.len(), 307);
        let index = index_positions(&page);
        assert!(!index.contains_key(&' '));
        assert!(!index.contains_key(&'e'));
        assert!(index.contains_key(&'V'));
        // Short sequences keep every char.
        assert!(index_positions(&chars("a a a a")).contains_key(&'a'));
    }

    #[test]
    fn unrelated_record_against_long_page_scores_low() {
        let record = "Patta holder Ravi Kumar son of Selvam owns the dry land in survey number 42 \
            measuring one acre and ten cents near the old temple road";
        assert_eq!(record.chars().count(), 133);
        // Common letters and spaces would otherwise lift this to about 0.345.
        let score = similarity(record, PAGE);
        assert!((score - 1.0 / 22.0).abs() < 1e-12, "got {score}");
        assert_eq!(similarity(PAGE, record), score);
    }

    #[test]
    fn long_identical_texts_still_score_one() {
        assert_eq!(similarity(PAGE, PAGE), 1.0);
        let blank_heavy = format!("{}x", " a".repeat(150));
        assert_eq!(similarity(&blank_heavy, &blank_heavy), 1.0);
    }

    #[test]
    fn indel_metric_matches_identity_and_emptiness() {
        let metric = SimilarityMetric::Indel;
        assert_eq!(metric.score_str("survey", "survey"), 1.0);
        assert_eq!(metric.score_str("", "survey"), 0.0);
        let near = metric.score_str("quick brown", "qick brown");
        assert!(near > 0.9 && near < 1.0, "got {near}");
    }
}
