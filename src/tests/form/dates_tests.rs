use chrono::NaiveDate;

use crate::domain::{ParentDefaults, ProgramData, SubProgram, SubProgramKind, SubProgramPatch};
use crate::form::{SubProgramRoster, is_within_range, sub_range_valid};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn mk_sub(start: Option<NaiveDate>, end: Option<NaiveDate>) -> SubProgram {
    let mut roster = SubProgramRoster::new();
    let id = roster.add(&ParentDefaults::default(), SubProgramKind::General);
    roster.apply(&id, SubProgramPatch::StartDate(start));
    roster.apply(&id, SubProgramPatch::EndDate(end));
    roster.get(&id).unwrap().clone()
}

fn mk_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ProgramData {
    ProgramData {
        start_date: start,
        end_date: end,
        ..ProgramData::default()
    }
}

#[test]
fn missing_bounds_are_permissive() {
    let date = d(2025, 6, 15);
    assert!(is_within_range(date, None, Some(d(2025, 1, 1))));
    assert!(is_within_range(date, Some(d(2026, 1, 1)), None));
    assert!(is_within_range(date, None, None));
}

#[test]
fn bounds_are_inclusive() {
    let start = d(2025, 5, 1);
    let end = d(2025, 11, 14);
    assert!(is_within_range(start, Some(start), Some(end)));
    assert!(is_within_range(end, Some(start), Some(end)));
    assert!(is_within_range(d(2025, 8, 1), Some(start), Some(end)));
    assert!(!is_within_range(d(2025, 4, 30), Some(start), Some(end)));
    assert!(!is_within_range(d(2025, 11, 15), Some(start), Some(end)));
}

#[test]
fn date_after_program_end_is_out_of_range() {
    assert!(!is_within_range(
        d(2025, 12, 1),
        Some(d(2025, 5, 1)),
        Some(d(2025, 11, 14)),
    ));
}

#[test]
fn unset_sub_range_is_valid() {
    let parent = mk_window(Some(d(2025, 5, 1)), Some(d(2025, 11, 14)));
    assert!(sub_range_valid(&mk_sub(None, None), &parent));
    assert!(sub_range_valid(&mk_sub(Some(d(2025, 6, 1)), None), &parent));
}

#[test]
fn unset_parent_window_is_valid() {
    let parent = mk_window(Some(d(2025, 5, 1)), None);
    let sub = mk_sub(Some(d(2030, 1, 1)), Some(d(2030, 2, 1)));
    assert!(sub_range_valid(&sub, &parent));
}

#[test]
fn contained_sub_range_is_valid() {
    let parent = mk_window(Some(d(2025, 5, 1)), Some(d(2025, 11, 14)));
    let sub = mk_sub(Some(d(2025, 5, 1)), Some(d(2025, 11, 14)));
    assert!(sub_range_valid(&sub, &parent));
}

#[test]
fn escaping_sub_range_is_flagged() {
    let parent = mk_window(Some(d(2025, 5, 1)), Some(d(2025, 11, 14)));
    let sub = mk_sub(Some(d(2025, 10, 1)), Some(d(2025, 12, 1)));
    assert!(!sub_range_valid(&sub, &parent));
}
