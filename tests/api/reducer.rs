//! tests/api/reducer.rs
use crate::helpers::reduce;
use goal_tally::outcome::SkipKind;
use proptest::prelude::*;

#[test]
fn non_contiguous_runs_are_not_merged() {
    let (output, _) = reduce("A\t1\nB\t1\nA\t1\n");

    assert_eq!(output, "A\t1\nB\t1\nA\t1\n");
}

#[test]
fn blank_lines_inside_a_run_are_ignored() {
    let (output, report) = reduce("A\t1\n\n  \nA\t1\n\t\nA\t1\n");

    assert_eq!(output, "A\t3\n");
    assert_eq!(report.skipped(SkipKind::Blank), 3);
}

#[test]
fn empty_input_produces_nothing() {
    let (output, report) = reduce("");

    assert_eq!(output, "");
    assert_eq!(report.emitted(), 0);
}

#[test]
fn malformed_pairs_leave_the_sum_untouched() {
    let (output, report) = reduce("A\t2\nA\tthree\nA 4\nA\t1\n");

    assert_eq!(output, "A\t3\n");
    assert_eq!(report.total_skipped(), 2);
}

fn grouped_counts() -> impl Strategy<Value = Vec<(String, usize)>> {
    prop::collection::vec(("[a-z]{1,6}\\|(true|false)", 1usize..20), 0..12).prop_map(|groups| {
        // Collapse duplicate keys so each key forms exactly one run.
        let mut seen = std::collections::BTreeMap::new();
        for (key, count) in groups {
            seen.entry(key).or_insert(count);
        }
        seen.into_iter().collect()
    })
}

proptest! {
    #[test]
    fn grouped_input_sums_to_the_count_per_key(groups in grouped_counts()) {
        let input: String = groups
            .iter()
            .flat_map(|(key, count)| std::iter::repeat(format!("{key}\t1\n")).take(*count))
            .collect();

        let (output, _) = reduce(&input);

        let expected: String = groups
            .iter()
            .map(|(key, count)| format!("{key}\t{count}\n"))
            .collect();
        prop_assert_eq!(output, expected);
    }
}
