use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::domain::{CustomField, ProgramData, SubProgram};

/// Assembles the save payload handed to the persistence host: the parent
/// form, the roster and both custom-field definition lists, in camelCase
/// with dates as ISO-8601 strings.
pub fn build_payload(
    program: &ProgramData,
    sub_programs: &[SubProgram],
    program_fields: &[CustomField],
    sub_program_fields: &[CustomField],
) -> Result<Value> {
    let program = serde_json::to_value(program).context("failed to serialize program data")?;
    let sub_programs =
        serde_json::to_value(sub_programs).context("failed to serialize sub-programs")?;
    let program_fields = serde_json::to_value(program_fields)
        .context("failed to serialize program custom fields")?;
    let sub_program_fields = serde_json::to_value(sub_program_fields)
        .context("failed to serialize sub-program custom fields")?;
    Ok(json!({
        "programData": program,
        "subPrograms": sub_programs,
        "programCustomFields": program_fields,
        "subProgramCustomFields": sub_program_fields,
    }))
}
