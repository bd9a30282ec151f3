mod client_database;
mod errors;
mod json_storage;

use std::path::Path;

use tracing::warn;

use crate::models::ClientRecord;
use crate::types::Monetary;

pub use client_database::ClientDatabase;
pub use errors::StorageError;
pub use json_storage::JsonStorage;

pub trait Storage {
    fn location(&self) -> &Path;
    fn save(&self, clients: &[ClientRecord]) -> Result<(), StorageError>;
    fn load(&self) -> Result<Vec<ClientRecord>, StorageError>;
}

/// Loads previously saved clients, treating a missing file as "no prior data".
pub fn load_or_empty<S: Storage>(storage: &S) -> Result<Vec<ClientRecord>, StorageError> {
    match storage.load() {
        Err(StorageError::NotFound { path }) => {
            warn!("No saved clients at [{}], starting empty", path.display());
            Ok(Vec::new())
        }
        result => result
    }
}

/// Every client whose balance is strictly below `threshold`, in their original order.
pub fn filter_below_threshold(clients: &[ClientRecord], threshold: Monetary) -> Vec<ClientRecord> {
    clients.iter()
        .filter(|client| client.is_below(threshold))
        .cloned()
        .collect()
}
