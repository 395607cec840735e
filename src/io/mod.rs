mod output;
mod payload;

pub use output::{OutputDestination, OutputOptions, emit};
pub use payload::build_payload;
