//! Tally engine: input discovery, decoding, report output, and the count job.
mod decode;
mod discover;
mod error;
mod job;
mod persist;
mod report;

pub use decode::{read_text, DecodedText};
pub use discover::discover_files;
pub use error::CountError;
pub use job::{CountJob, JobConfig, JobSummary};
pub use persist::{check_output_dir, AtomicFileWriter, PersistError};
pub use report::{render_counts, ReportError, REPORT_FILENAME};
