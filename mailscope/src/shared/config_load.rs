use crate::shared::{DEFAULT_OUTPUT_PREFIX, RUN_ID_ENV_VAR};
use anyhow::{anyhow, Result};
use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("config"))]
pub struct ConfigOptions {
    /// Override the working directory. Relative input and output paths resolve against it.
    #[arg(long, short = 'C', global(true))]
    working_dir: Option<String>,

    /// Directory the analysis file is written to. Defaults to the working directory.
    #[arg(long, short = 'o', env = "MAILSCOPE_OUTPUT_DIR", global(true))]
    output_dir: Option<String>,

    /// Prefix for the analysis file, which is named `<prefix>_YYYYMMDD_HHMMSS.json`.
    #[arg(long, env = "MAILSCOPE_OUTPUT_PREFIX", global(true))]
    output_prefix: Option<String>,

    /// Names the log file for this run. In the case that the run-id is re-used,
    /// the old log will be overwritten.
    #[arg(long, global(true), env = RUN_ID_ENV_VAR)]
    run_id: Option<String>,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    pub fn load_config(&self) -> Result<FoundConfig> {
        let current_dir = std::env::current_dir();
        let working_dir = match (current_dir, &self.working_dir) {
            (Ok(cwd), None) => cwd,
            (_, Some(dir)) => PathBuf::from(&dir),
            _ => {
                error!(target: "user", "Unable to get a working dir");
                return Err(anyhow!("Unable to get a working dir"));
            }
        };

        let output_dir = match &self.output_dir {
            Some(dir) => resolve_path(&working_dir, dir),
            None => working_dir.clone(),
        };

        let found_config = FoundConfig {
            working_dir,
            output_dir,
            output_prefix: self
                .output_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string()),
        };

        debug!("Loaded config {:?}", found_config);

        Ok(found_config)
    }
}

/// Settings resolved once at startup and shared by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundConfig {
    pub working_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_prefix: String,
}

impl FoundConfig {
    pub fn empty(working_dir: PathBuf) -> Self {
        Self {
            output_dir: working_dir.clone(),
            working_dir,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
        }
    }

    /// Resolves a user supplied path against the working dir.
    pub fn resolve(&self, path: &str) -> PathBuf {
        resolve_path(&self.working_dir, path)
    }
}

fn resolve_path(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
