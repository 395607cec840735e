use serde_json::Value;

use crate::domain::{CustomField, ProgramData, SubProgram};
use crate::form::sub_range_valid;
use crate::io::build_payload;

const MIN_DESCRIPTION_LEN: usize = 10;

/// How strongly an issue should be surfaced. Warnings are advisory and
/// never block a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A field-level validation message, addressed by a JSON-pointer-like
/// path so the rendering collaborator can attach it to the right input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub pointer: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    fn error(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    fn warning(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

#[derive(Debug)]
pub enum ValidationOutcome {
    /// Every rule passed; carries the assembled save payload plus any
    /// advisory warnings.
    Valid {
        payload: Value,
        warnings: Vec<ValidationIssue>,
    },
    Invalid { issues: Vec<ValidationIssue> },
    BuildError { message: String },
}

/// Runs the field-level rules over the parent form and the roster. Date
/// containment issues are warnings only; everything else is an error.
pub fn validate_program(
    program: &ProgramData,
    sub_programs: &[SubProgram],
    program_fields: &[CustomField],
    sub_program_fields: &[CustomField],
) -> ValidationOutcome {
    let issues = collect_issues(program, sub_programs, program_fields, sub_program_fields);
    if issues.iter().any(|issue| issue.severity == Severity::Error) {
        return ValidationOutcome::Invalid { issues };
    }
    match build_payload(program, sub_programs, program_fields, sub_program_fields) {
        Ok(payload) => ValidationOutcome::Valid {
            payload,
            warnings: issues,
        },
        Err(err) => ValidationOutcome::BuildError {
            message: err.to_string(),
        },
    }
}

fn collect_issues(
    program: &ProgramData,
    sub_programs: &[SubProgram],
    program_fields: &[CustomField],
    sub_program_fields: &[CustomField],
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if program.program_name.trim().is_empty() {
        issues.push(ValidationIssue::error(
            "/programName",
            "Program name is required",
        ));
    }
    if program.description.trim().len() < MIN_DESCRIPTION_LEN {
        issues.push(ValidationIssue::error(
            "/description",
            "Description should be at least 10 characters",
        ));
    }
    if program.start_date.is_none() {
        issues.push(ValidationIssue::error("/startDate", "Start date is required"));
    }
    if program.end_date.is_none() {
        issues.push(ValidationIssue::error("/endDate", "End date is required"));
    }
    if let (Some(start), Some(end)) = (program.start_date, program.end_date)
        && end < start
    {
        issues.push(ValidationIssue::error(
            "/endDate",
            "End date must not be before the start date",
        ));
    }
    if program.mode.is_none() {
        issues.push(ValidationIssue::error("/modeOfProgram", "Please select a mode"));
    }
    if program.is_payment_required.is_none() {
        issues.push(ValidationIssue::error(
            "/isPaymentRequired",
            "Please choose whether payment is required",
        ));
    }
    if program.has_seat_limit.is_some_and(|flag| flag.is_yes())
        && program.seat_limit.trim().is_empty()
    {
        issues.push(ValidationIssue::error("/seatLimit", "Seat limit is required"));
    }
    if program.has_waitlist.is_some_and(|flag| flag.is_yes())
        && program.waitlist_trigger_count.trim().is_empty()
    {
        issues.push(ValidationIssue::error(
            "/waitlistTriggerCount",
            "Waitlist trigger count is required",
        ));
    }
    required_field_issues(&mut issues, "/customFields", program_fields, |field_id| {
        program.custom_fields.get(field_id)
    });

    for (index, sub) in sub_programs.iter().enumerate() {
        let prefix = format!("/subPrograms/{index}");
        if sub.title.trim().is_empty() {
            issues.push(ValidationIssue::error(
                format!("{prefix}/title"),
                "Sub-program title is required",
            ));
        }
        if sub.description.trim().len() < MIN_DESCRIPTION_LEN {
            issues.push(ValidationIssue::error(
                format!("{prefix}/description"),
                "Description should be at least 10 characters",
            ));
        }
        if sub.start_date.is_none() {
            issues.push(ValidationIssue::error(
                format!("{prefix}/startDate"),
                "Start date is required",
            ));
        }
        if sub.end_date.is_none() {
            issues.push(ValidationIssue::error(
                format!("{prefix}/endDate"),
                "End date is required",
            ));
        }
        if let (Some(start), Some(end)) = (sub.start_date, sub.end_date)
            && end < start
        {
            issues.push(ValidationIssue::error(
                format!("{prefix}/endDate"),
                "End date must not be before the start date",
            ));
        }
        if !sub_range_valid(sub, program) {
            issues.push(ValidationIssue::warning(
                format!("{prefix}/dateRange"),
                "Dates fall outside the program window",
            ));
        }
        required_field_issues(
            &mut issues,
            &format!("{prefix}/customFields"),
            sub_program_fields,
            |field_id| sub.custom_fields.get(field_id),
        );
    }

    issues
}

fn required_field_issues<'a>(
    issues: &mut Vec<ValidationIssue>,
    prefix: &str,
    fields: &[CustomField],
    value_of: impl Fn(&str) -> Option<&'a String>,
) {
    for field in fields {
        if !field.required {
            continue;
        }
        let missing = value_of(&field.id).is_none_or(|value| value.trim().is_empty());
        if missing {
            issues.push(ValidationIssue::error(
                format!("{prefix}/{}", field.id),
                format!("{} is required", field.label),
            ));
        }
    }
}
