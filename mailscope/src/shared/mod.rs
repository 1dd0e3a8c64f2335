mod config_load;
mod logging;
mod output;

pub const RUN_ID_ENV_VAR: &str = "MAILSCOPE_RUN_ID";
pub const DEFAULT_OUTPUT_PREFIX: &str = "email_analysis";

pub mod prelude {
    pub use super::config_load::{ConfigOptions, FoundConfig};
    pub use super::logging::LoggingOpts;
    pub use super::output::{output_file_name, render_json, write_analysis};
    pub use super::{DEFAULT_OUTPUT_PREFIX, RUN_ID_ENV_VAR};
}
