//! Character-level edit distance and the similarity ratio built on it.
//!
//! Lengths and positions are measured in `char`s (Unicode scalar values), so a
//! multi-byte character counts as a single edit.

/// Levenshtein distance between two lines.
///
/// Insertions, deletions and substitutions all cost 1. Only two rows of the
/// table are kept, sized by the shorter line.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = (0..=short.len()).collect::<Vec<_>>();
    let mut curr = vec![0usize; short.len() + 1];

    for i in 1..=long.len() {
        curr[0] = i;
        for j in 1..=short.len() {
            let cost = usize::from(long[i - 1] != short[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Normalized similarity in `[0, 1]`; two empty lines are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::{edit_distance, similarity};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", 0)]
    #[case("", "abc", 3)]
    #[case("abc", "", 3)]
    #[case("kitten", "sitting", 3)]
    #[case("flaw", "lawn", 2)]
    #[case("foo bar", "foo baz", 1)]
    #[case("naïve", "naive", 1)]
    fn computes_edit_distance(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(edit_distance(a, b), expected);
    }

    #[test]
    fn single_character_change_in_seven_is_above_default_threshold() {
        let score = similarity("foo bar", "foo baz");

        assert!((score - (1.0 - 1.0 / 7.0)).abs() < f64::EPSILON);
        assert!(score > 0.7);
    }

    #[test]
    fn long_lines_are_scored_exactly() {
        let a = "a".repeat(10_000);
        let mut b = a.clone();
        b.replace_range(5_000..5_003, "xyz");
        b.push_str("!!!!");

        assert_eq!(edit_distance(&a, &b), 7);
        assert_eq!(edit_distance(&a, &"b".repeat(10_000)), 10_000);
        assert!(similarity(&a, &b) > 0.99);
    }

    #[test]
    fn empty_lines_are_identical() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn disjoint_lines_score_zero() {
        assert_eq!(similarity("x", "b"), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn unrelated_sentences_fall_below_default_threshold() {
        assert!(similarity("completely different content", "totally unrelated text") < 0.7);
    }

    // Full-table Levenshtein for comparison.
    fn full_table_distance(a: &str, b: &str) -> usize {
        let a = a.chars().collect::<Vec<_>>();
        let b = b.chars().collect::<Vec<_>>();
        let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for (i, row) in table.iter_mut().enumerate() {
            row[0] = i;
        }
        table[0] = (0..=b.len()).collect();
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                table[i][j] = (table[i - 1][j] + 1)
                    .min(table[i][j - 1] + 1)
                    .min(table[i - 1][j - 1] + cost);
            }
        }
        table[a.len()][b.len()]
    }

    proptest! {
        #[test]
        fn prop_matches_full_table(a in "[a-c]{0,20}", b in "[a-c]{0,20}") {
            prop_assert_eq!(edit_distance(&a, &b), full_table_distance(&a, &b));
        }

        #[test]
        fn prop_edit_distance_is_symmetric(a in "\\PC{0,24}", b in "\\PC{0,24}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn prop_edit_distance_to_self_is_zero(a in "\\PC{0,32}") {
            prop_assert_eq!(edit_distance(&a, &a), 0);
        }

        #[test]
        fn prop_edit_distance_is_bounded_by_longer_line(a in "[a-d]{0,16}", b in "[a-d]{0,16}") {
            let longer = a.chars().count().max(b.chars().count());
            let length_gap = a.chars().count().abs_diff(b.chars().count());
            let distance = edit_distance(&a, &b);
            prop_assert!(distance <= longer);
            prop_assert!(distance >= length_gap);
        }

        #[test]
        fn prop_similarity_to_self_is_one(a in "\\PC{0,32}") {
            prop_assert_eq!(similarity(&a, &a), 1.0);
        }

        #[test]
        fn prop_similarity_is_symmetric_and_in_range(a in "\\PC{0,24}", b in "\\PC{0,24}") {
            let forward = similarity(&a, &b);
            prop_assert_eq!(forward, similarity(&b, &a));
            prop_assert!((0.0..=1.0).contains(&forward));
        }
    }
}
