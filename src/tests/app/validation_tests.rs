use chrono::NaiveDate;

use crate::app::{Severity, ValidationOutcome, validate_program};
use crate::domain::{
    CustomField, FieldType, Mode, ParentDefaults, ProgramData, SubProgramKind, SubProgramPatch,
    YesNo,
};
use crate::form::SubProgramRoster;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn mk_valid_program() -> ProgramData {
    ProgramData {
        program_name: "Leadership 2025".to_string(),
        description: "Grow leadership across cohorts".to_string(),
        start_date: Some(d(2025, 5, 1)),
        end_date: Some(d(2025, 11, 14)),
        mode: Some(Mode::Online),
        is_payment_required: Some(YesNo::Yes),
        ..ProgramData::default()
    }
}

fn pointers(issues: &[crate::app::ValidationIssue]) -> Vec<&str> {
    issues.iter().map(|issue| issue.pointer.as_str()).collect()
}

#[test]
fn empty_program_reports_required_errors() {
    let ValidationOutcome::Invalid { issues } =
        validate_program(&ProgramData::default(), &[], &[], &[])
    else {
        panic!("empty program should be invalid");
    };
    let pointers = pointers(&issues);
    for expected in [
        "/programName",
        "/description",
        "/startDate",
        "/endDate",
        "/modeOfProgram",
        "/isPaymentRequired",
    ] {
        assert!(pointers.contains(&expected), "missing {expected}");
    }
}

#[test]
fn valid_program_builds_payload() {
    let ValidationOutcome::Valid { payload, warnings } =
        validate_program(&mk_valid_program(), &[], &[], &[])
    else {
        panic!("program should be valid");
    };
    assert!(warnings.is_empty());
    assert!(payload.get("programData").is_some());
    assert_eq!(
        payload
            .get("programData")
            .and_then(|data| data.get("programName"))
            .and_then(|name| name.as_str()),
        Some("Leadership 2025")
    );
}

#[test]
fn sub_program_issues_are_pointer_indexed() {
    let mut roster = SubProgramRoster::new();
    roster.add(&ParentDefaults::default(), SubProgramKind::General);

    let ValidationOutcome::Invalid { issues } =
        validate_program(&mk_valid_program(), roster.entries(), &[], &[])
    else {
        panic!("incomplete sub-program should be invalid");
    };
    let pointers = pointers(&issues);
    for expected in [
        "/subPrograms/0/description",
        "/subPrograms/0/startDate",
        "/subPrograms/0/endDate",
    ] {
        assert!(pointers.contains(&expected), "missing {expected}");
    }
}

#[test]
fn out_of_range_sub_dates_warn_without_blocking() {
    let mut roster = SubProgramRoster::new();
    let id = roster.add(&ParentDefaults::default(), SubProgramKind::General);
    roster.apply(
        &id,
        SubProgramPatch::Description("A reasonably long description".to_string()),
    );
    roster.apply(&id, SubProgramPatch::StartDate(Some(d(2025, 12, 1))));
    roster.apply(&id, SubProgramPatch::EndDate(Some(d(2025, 12, 5))));

    let ValidationOutcome::Valid { warnings, .. } =
        validate_program(&mk_valid_program(), roster.entries(), &[], &[])
    else {
        panic!("advisory warnings must not block a save");
    };
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].pointer, "/subPrograms/0/dateRange");
    assert_eq!(warnings[0].severity, Severity::Warning);
}

#[test]
fn end_before_start_is_an_error() {
    let mut program = mk_valid_program();
    program.end_date = Some(d(2025, 4, 1));

    let ValidationOutcome::Invalid { issues } = validate_program(&program, &[], &[], &[]) else {
        panic!("inverted range should be invalid");
    };
    assert!(pointers(&issues).contains(&"/endDate"));
}

#[test]
fn seat_limit_required_when_enabled() {
    let mut program = mk_valid_program();
    program.has_seat_limit = Some(YesNo::Yes);

    let ValidationOutcome::Invalid { issues } = validate_program(&program, &[], &[], &[]) else {
        panic!("missing seat limit should be invalid");
    };
    assert!(pointers(&issues).contains(&"/seatLimit"));

    program.seat_limit = "40".to_string();
    assert!(matches!(
        validate_program(&program, &[], &[], &[]),
        ValidationOutcome::Valid { .. }
    ));
}

#[test]
fn required_custom_fields_must_have_values() {
    let field = CustomField::new("Sponsor", FieldType::Text, true, None, Vec::new());
    let mut program = mk_valid_program();

    let ValidationOutcome::Invalid { issues } =
        validate_program(&program, &[], std::slice::from_ref(&field), &[])
    else {
        panic!("missing required field value should be invalid");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].pointer, format!("/customFields/{}", field.id));

    program
        .custom_fields
        .insert(field.id.clone(), "Acme".to_string());
    assert!(matches!(
        validate_program(&program, &[], std::slice::from_ref(&field), &[]),
        ValidationOutcome::Valid { .. }
    ));
}
