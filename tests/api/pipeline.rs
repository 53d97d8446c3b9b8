//! tests/api/pipeline.rs
use crate::helpers::{map, read_fixture, reduce, run_locally, sort_lines};

#[test]
fn map_sort_reduce_counts_each_group() {
    let input = "id,title,...\n1,Run,,,,,false,,,,\n2,Run,,,,,false,,,,\n3,Swim,,,,,true,,,,";

    let (mapped, _) = map(input);
    assert_eq!(mapped, "Run|false\t1\nRun|false\t1\nSwim|true\t1\n");

    let (reduced, _) = reduce(&sort_lines(&mapped));
    assert_eq!(reduced, "Run|false\t2\nSwim|true\t1\n");
}

#[test]
fn local_runner_matches_the_staged_pipeline() {
    let input = read_fixture("goals.csv");

    let (mapped, _) = map(&input);
    let (staged, _) = reduce(&sort_lines(&mapped));

    assert_eq!(run_locally(&input), staged);
    assert_eq!(staged, "Read|false\t2\nRead|true\t1\nRun 5k|false\t1\nRun 5k|true\t2\n");
}

#[test]
fn unsorted_map_output_is_reduced_per_run() {
    let (mapped, _) = map(&read_fixture("goals.csv"));

    let (reduced, _) = reduce(&mapped);

    assert_eq!(
        reduced,
        "Run 5k|true\t1\nRead|false\t1\nRun 5k|false\t1\nRun 5k|true\t1\nRead|true\t1\nRead|false\t1\n"
    );
}
