mod errors;
mod types;
mod utils;

pub use errors::{ComparisonError, NormalizeError};
pub use types::{ImageSource, RawImageInput};
pub use utils::{clamp_score, round_to_hundredths};
