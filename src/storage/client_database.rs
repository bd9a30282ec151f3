use tracing::warn;

use crate::models::ClientRecord;
use crate::storage::{filter_below_threshold, Storage, StorageError};
use crate::types::Monetary;

/// Ordered, in-memory collection of clients for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct ClientDatabase {
    clients: Vec<ClientRecord>
}

impl ClientDatabase {
    pub fn new() -> Self {
        Self {
            clients: Vec::new()
        }
    }

    pub fn add_client(&mut self, client: ClientRecord) {
        self.clients.push(client);
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn below_threshold(&self, threshold: Monetary) -> Vec<ClientRecord> {
        filter_below_threshold(&self.clients, threshold)
    }

    pub fn save_to<S: Storage>(&self, storage: &S) -> Result<(), StorageError> {
        storage.save(&self.clients)
    }

    /// Replaces the current clients with the stored ones.
    ///
    /// Returns `Ok(false)` and keeps the current clients when nothing has been saved yet.
    pub fn load_from<S: Storage>(&mut self, storage: &S) -> Result<bool, StorageError> {
        match storage.load() {
            Ok(clients) => {
                self.clients = clients;
                Ok(true)
            }
            Err(StorageError::NotFound { path }) => {
                warn!("Client file [{}] does not exist, keeping {} clients in memory", path.display(), self.clients.len());
                Ok(false)
            }
            Err(error) => Err(error)
        }
    }
}

impl Extend<ClientRecord> for ClientDatabase {
    fn extend<I: IntoIterator<Item = ClientRecord>>(&mut self, clients: I) {
        self.clients.extend(clients);
    }
}
