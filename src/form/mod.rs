mod dates;
mod highlight;
mod prefill;
mod roster;

pub use dates::{is_within_range, sub_range_valid};
pub use highlight::{
    CLEAR_AFTER, Clock, FADE_OUT_AFTER, HighlightSequencer, HighlightStep, ManualClock,
    SystemClock, VISIBLE_AFTER,
};
pub use prefill::{PrefillSeed, prefill};
pub use roster::SubProgramRoster;
