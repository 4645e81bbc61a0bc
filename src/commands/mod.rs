//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod build;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use build::{execute_build, run_pipeline, validate_api_uri, validate_args, BuildOutput};
pub use models::BuildArgs;
pub use utils::{display_version, validate_report_file};
