use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use tally_core::TokenList;
use tally_engine::JobConfig;

/// Conventional mount points of the managed processing container.
pub const DEFAULT_INPUT_DIR: &str = "/opt/ml/processing/input_data";
pub const DEFAULT_OUTPUT_DIR: &str = "/opt/ml/processing/processed_data";
pub const DEFAULT_LOG_FILE: &str = "./token_counter.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to the log file only.
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Parser, Debug)]
#[command(
    name = "token_counter",
    version,
    about = "Count literal token occurrences across a directory of text files."
)]
pub struct Cli {
    /// Comma-separated tokens to count, used exactly as split (no trimming)
    #[arg(long)]
    pub tokens: String,

    /// Directory scanned recursively for input files
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Existing directory that receives token_counts.json
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log destination
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log file used when --log is `file` or `both`
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log per-file progress
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn job_config(&self) -> anyhow::Result<JobConfig> {
        let tokens = TokenList::parse(&self.tokens)
            .with_context(|| format!("invalid --tokens value {:?}", self.tokens))?;
        Ok(JobConfig {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            tokens,
        })
    }
}
