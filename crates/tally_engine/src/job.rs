use std::path::PathBuf;

use tally_core::{strip_line_breaks, SubstringCounter, TokenCountTable, TokenCounter, TokenList};
use tally_logging::{tally_debug, tally_info};

use crate::persist::{check_output_dir, AtomicFileWriter};
use crate::report::{render_counts, REPORT_FILENAME};
use crate::{discover_files, read_text, CountError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tokens: TokenList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub files_scanned: usize,
    pub bytes_scanned: u64,
    pub output_path: PathBuf,
    pub counts: TokenCountTable,
}

/// One batch pass: count tokens across every file under the input directory
/// and write `token_counts.json` to the output directory.
pub struct CountJob {
    config: JobConfig,
}

impl CountJob {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<JobSummary, CountError> {
        self.run_with(&SubstringCounter)
    }

    pub fn run_with<C: TokenCounter + ?Sized>(&self, counter: &C) -> Result<JobSummary, CountError> {
        let JobConfig {
            input_dir,
            output_dir,
            tokens,
        } = &self.config;

        tally_info!(
            "Counting {} token(s) in {:?}, report to {:?}",
            tokens.len(),
            input_dir,
            output_dir
        );

        // Fail on a bad destination before spending time on the inputs.
        check_output_dir(output_dir)?;
        let files = discover_files(input_dir)?;
        tally_debug!("Discovered {} file(s)", files.len());

        let mut counts = TokenCountTable::new(tokens);
        let mut bytes_scanned: u64 = 0;
        for path in &files {
            let decoded = read_text(path)?;
            bytes_scanned += decoded.byte_len;
            counts.accumulate(counter, &strip_line_breaks(&decoded.text));
            tally_debug!("Scanned {:?} ({} bytes)", path, decoded.byte_len);
        }

        let report = render_counts(&counts)?;
        let writer = AtomicFileWriter::new(output_dir.clone());
        let output_path = writer.write(REPORT_FILENAME, &report)?;

        tally_info!(
            "Scanned {} file(s), {} bytes; {} occurrence(s) written to {:?}",
            files.len(),
            bytes_scanned,
            counts.total(),
            output_path
        );

        Ok(JobSummary {
            files_scanned: files.len(),
            bytes_scanned,
            output_path,
            counts,
        })
    }
}
