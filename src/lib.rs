#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod io;


use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
        tracing::debug!("programkit tracing initialized");
    });
}

pub mod prelude {
    pub use crate::app::{
        Effect, FieldScope, NavigationIntent, ProgramCommand, ProgramController, ToastKind,
    };
    pub use crate::domain::{
        BannerHandle, CustomField, FieldType, HighlightPhase, Mode, ParentDefaults, ProgramData,
        ProgramPatch, SubProgram, SubProgramKind, SubProgramPatch, YesNo,
    };
    pub use crate::form::{
        HighlightSequencer, ManualClock, SubProgramRoster, SystemClock, is_within_range,
        prefill, sub_range_valid,
    };
}
