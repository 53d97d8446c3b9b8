//! tests/api/mapper.rs
use crate::helpers::{map, read_fixture};
use goal_tally::outcome::SkipKind;

#[test]
fn header_line_is_skipped_and_the_rest_is_mapped() {
    let (output, report) = map(
        "Id,title,description,currentValue,targetValue,unit,completed,date,isPunishment,isManualTask,createdAt\n\
         1,Run,,,,,false,,,,\n",
    );

    assert_eq!(output, "Run|false\t1\n");
    assert_eq!(report.skipped(SkipKind::Header), 1);
}

#[test]
fn key_is_title_and_lowercased_completion() {
    let (output, _) = map("1,Run 5k,,,,,True,,,,\n");

    assert_eq!(output, "Run 5k|true\t1\n");
}

#[test]
fn short_and_untitled_records_are_dropped() {
    let (output, report) = map("1,Run,a,b,c\n2,,a,b,c,d,true,e,f,g,h,i\n");

    assert_eq!(output, "");
    assert_eq!(report.skipped(SkipKind::TooFewFields), 1);
    assert_eq!(report.skipped(SkipKind::EmptyTitle), 1);
}

#[test]
fn header_only_input_produces_nothing() {
    let (output, report) = map("id,title\n");

    assert_eq!(output, "");
    assert_eq!(report.emitted(), 0);
}

#[test]
fn empty_input_produces_nothing() {
    let (output, report) = map("");

    assert_eq!(output, "");
    assert_eq!(report.lines_read(), 0);
}

#[test]
fn fixture_is_mapped_in_input_order() {
    let (output, report) = map(&read_fixture("goals.csv"));

    assert_eq!(
        output,
        "Run 5k|true\t1\n\
         Read|false\t1\n\
         Run 5k|false\t1\n\
         Run 5k|true\t1\n\
         Read|true\t1\n\
         Read|false\t1\n"
    );
    assert_eq!(report.skipped(SkipKind::Header), 1);
    assert_eq!(report.skipped(SkipKind::EmptyTitle), 1);
    // The short "Cold shower" row and the blank line.
    assert_eq!(report.skipped(SkipKind::TooFewFields), 2);
}
