mod commands;
mod controller;
mod effects;
mod status;
mod validation;

pub use commands::{FieldScope, ProgramCommand};
pub use controller::ProgramController;
pub use effects::{Effect, NavigationIntent, ToastKind};
pub use status::StatusLine;
pub use validation::{Severity, ValidationIssue, ValidationOutcome, validate_program};
