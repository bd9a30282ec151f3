use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report [{}] could not be written: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    }
}
