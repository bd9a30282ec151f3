use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Client file [{}] does not exist", .path.display())]
    NotFound {
        path: PathBuf
    },
    #[error("Client file [{}] could not be accessed: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Client file [{}] is not a valid client list: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error
    },
    #[error("Clients could not be encoded for [{}]: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error
    }
}

impl StorageError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound { path: path.to_path_buf() };
        }

        Self::write(path, source)
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        if source.is_io() {
            return Self::read(path, source.into());
        }

        Self::Parse { path: path.to_path_buf(), source }
    }

    pub fn encode(path: &Path, source: serde_json::Error) -> Self {
        Self::Encode { path: path.to_path_buf(), source }
    }
}
