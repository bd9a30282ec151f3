use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use tracing::debug;

use crate::models::ClientRecord;
use crate::storage::{Storage, StorageError};

const JSON_INDENT: &[u8] = b"    ";

/// Persists the client list as a pretty-printed JSON array.
///
/// Output uses four-space indentation and leaves non-ASCII text (e.g. diacritics) unescaped.
/// Saving always overwrites the whole file.
pub struct JsonStorage {
    path: PathBuf
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into()
        }
    }
}

impl Storage for JsonStorage {
    fn location(&self) -> &Path {
        &self.path
    }

    fn save(&self, clients: &[ClientRecord]) -> Result<(), StorageError> {
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));

        clients.serialize(&mut serializer)
            .map_err(|error| StorageError::encode(&self.path, error))?;

        fs::write(&self.path, buffer).map_err(|error| StorageError::write(&self.path, error))?;

        debug!("Saved {} clients to [{}]", clients.len(), self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Vec<ClientRecord>, StorageError> {
        let file = File::open(&self.path).map_err(|error| StorageError::read(&self.path, error))?;

        let clients: Vec<ClientRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|error| StorageError::parse(&self.path, error))?;

        debug!("Loaded {} clients from [{}]", clients.len(), self.path.display());

        Ok(clients)
    }
}
