use chrono::NaiveDate;

use crate::domain::{ProgramData, SubProgram};

/// Calendar-date containment check used to gate calendar selection.
/// Permissive by design: while either bound of the parent range is unset
/// the validator never blocks input.
pub fn is_within_range(
    date: NaiveDate,
    range_start: Option<NaiveDate>,
    range_end: Option<NaiveDate>,
) -> bool {
    match (range_start, range_end) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => true,
    }
}

/// Advisory check that a sub-program's range sits fully inside the parent
/// window. True while either range is incompletely set. Surfaced as a
/// validation warning, never blocking.
pub fn sub_range_valid(sub: &SubProgram, parent: &ProgramData) -> bool {
    let (Some(sub_start), Some(sub_end)) = (sub.start_date, sub.end_date) else {
        return true;
    };
    let (Some(parent_start), Some(parent_end)) = (parent.start_date, parent.end_date) else {
        return true;
    };
    parent_start <= sub_start && sub_end <= parent_end
}
