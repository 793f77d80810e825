//! Property tests for normalization, similarity and span matching.

use ocrmap_core::{AlignConfig, SimilarityMetric, find_best_match, normalize, similarity};
use ocrmap_model::MatchKind;
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-d \\t\\n]{0,24}").expect("valid regex")
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in text()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_leaves_no_edge_or_double_spaces(s in text()) {
        let out = normalize(&s);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\n') && !out.contains('\t'));
    }

    #[test]
    fn similarity_is_symmetric(a in text(), b in text()) {
        prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
        let indel = SimilarityMetric::Indel;
        prop_assert_eq!(indel.score_str(&a, &b), indel.score_str(&b, &a));
    }

    #[test]
    fn similarity_is_bounded(a in text(), b in text()) {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn self_similarity_is_one(a in "[a-z ]{1,30}") {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn empty_side_scores_zero(a in text()) {
        prop_assert_eq!(similarity("", &a), 0.0);
        prop_assert_eq!(similarity(&a, ""), 0.0);
    }

    #[test]
    fn literal_substring_is_an_exact_match(
        prefix in "[a-z ]{0,12}",
        span in "[a-z]{1,8}( [a-z]{1,8}){0,2}",
        suffix in "[a-z ]{0,12}",
    ) {
        let target = format!("{prefix} {span} {suffix}");
        let found = find_best_match(&span, &target, &AlignConfig::default());
        prop_assert_eq!(found.kind, MatchKind::Exact);
        prop_assert_eq!(found.score, 1.0);
        let range = found.range.expect("exact match has a range");
        let normalized: Vec<char> = normalize(&target).chars().collect();
        let mapped: String = normalized[range].iter().collect();
        prop_assert_eq!(mapped, normalize(&span));
    }

    #[test]
    fn found_ranges_stay_inside_the_target(span in "[a-d ]{1,10}", target in "[a-d ]{0,40}") {
        let found = find_best_match(&span, &target, &AlignConfig::default());
        prop_assert!((0.0..=1.0).contains(&found.score));
        match found.range {
            Some(range) => {
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= normalize(&target).chars().count());
                prop_assert!(found.kind != MatchKind::Unmapped);
            }
            None => {
                prop_assert_eq!(found.score, 0.0);
                prop_assert_eq!(found.kind, MatchKind::Unmapped);
            }
        }
    }
}
