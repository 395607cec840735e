use crate::domain::{BannerHandle, CustomField, ProgramPatch, SubProgramKind, SubProgramPatch};

/// Where a committed custom field applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldScope {
    /// Program-level field, optionally mirrored into every sub-program.
    Program { apply_to_sub_programs: bool },
    /// A single sub-program's field list.
    SubProgram { id: String },
}

/// Input surface of the page controller. Each variant corresponds to a
/// user action reported by a view or dialog collaborator; `Tick` is the
/// host loop's periodic callback that drives highlight timers.
#[derive(Debug, Clone)]
pub enum ProgramCommand {
    UpdateProgram(ProgramPatch),
    UpdateProgramVenues(Vec<String>),
    AddSubProgram { kind: SubProgramKind },
    UpdateSubProgram { id: String, patch: SubProgramPatch },
    UpdateSubProgramVenues { id: String, venues: Vec<String> },
    UploadSubProgramBanner { id: String, banner: Option<BannerHandle> },
    /// Ask for confirmation before deleting; emits [`super::Effect::ConfirmRemove`].
    RequestRemoveSubProgram { id: String },
    /// The dialog collaborator confirmed; performs the deletion.
    ConfirmRemoveSubProgram { id: String },
    AddField { field: CustomField, scope: FieldScope },
    Save,
    Cancel,
    Tick,
}
