mod custom_field;
mod program;
mod sub_program;

pub use custom_field::{CustomField, FieldType};
pub use program::{
    CUSTOM_VENUE_SENTINEL, CurrencyOption, Mode, ParentDefaults, ProgramData, ProgramPatch,
    YesNo, currency_options, currency_symbol, venue_options,
};
pub use sub_program::{BannerHandle, HighlightPhase, SubProgram, SubProgramKind, SubProgramPatch};
