//! CLI command handlers, one file per command.

mod classify_error;
mod completions;
mod describe;
mod generate;
mod presets;
mod probe;
mod validate;

pub use classify_error::run_classify_error;
pub use completions::run_completions;
pub use describe::run_describe;
pub use generate::{run_generate, GenerateArgs};
pub use presets::run_presets;
pub use probe::run_probe;
pub use validate::run_validate;
