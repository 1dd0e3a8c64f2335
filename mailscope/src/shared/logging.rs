use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::{Format, PrettyFields};
use tracing_subscriber::{filter::filter_fn, prelude::*, Registry};

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    #[arg(skip = LevelFilter::WARN)]
    default_level: LevelFilter,
}

impl Default for LoggingOpts {
    fn default() -> Self {
        Self {
            verbose: 0,
            default_level: LevelFilter::WARN,
        }
    }
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => self.default_level,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Location of the detailed log for a run, under the system temp dir.
    pub fn log_file_path(run_id: &str, prefix: &str) -> PathBuf {
        std::env::temp_dir()
            .join("mailscope")
            .join(format!("mailscope-{}-{}.log", prefix, run_id))
    }

    /// Installs the global subscriber. Events with target `always` reach the console
    /// unconditionally, `user` events respect `-v`, and everything lands in the log file.
    ///
    /// The returned guard must be held until exit so the file writer can flush.
    pub fn configure_logging(
        &self,
        run_id: &str,
        prefix: &str,
    ) -> Result<(tracing_appender::non_blocking::WorkerGuard, String)> {
        let file_path = Self::log_file_path(run_id, prefix);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let (non_blocking, guard) = tracing_appender::non_blocking(
            strip_ansi_escapes::Writer::new(File::create(&file_path)?),
        );

        let file_output = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_ansi(false)
            .with_writer(non_blocking);

        let level_filter = self.to_level_filter();
        let console_output = tracing_subscriber::fmt::layer()
            .event_format(
                Format::default()
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .with_writer(std::io::stdout)
            .fmt_fields(PrettyFields::new())
            .with_filter(filter_fn(move |metadata| match metadata.target() {
                "user" => level_filter >= *metadata.level(),
                "always" => true,
                _ => false,
            }));

        let subscriber = Registry::default().with(console_output).with(file_output);

        tracing::subscriber::set_global_default(subscriber)?;

        Ok((guard, file_path.display().to_string()))
    }
}
