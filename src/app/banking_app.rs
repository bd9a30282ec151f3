use std::io::Write;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::app::AppConfig;
use crate::generator::generate_clients;
use crate::models::ClientRecord;
use crate::report::{BalanceReport, Clock};
use crate::storage::{ClientDatabase, JsonStorage, Storage, StorageError};

/// Runs the generate, save, display and report pipeline.
///
/// Console text goes to the writer passed to each step so the binary can hand over stdout
/// while tests capture it in a buffer. Diagnostics go through `tracing`.
pub struct BankingApp<R: Rng, C: Clock> {
    config: AppConfig,
    database: ClientDatabase,
    storage: JsonStorage,
    report: BalanceReport<C>,
    rng: R
}

impl<R: Rng, C: Clock> BankingApp<R, C> {
    pub fn new(config: AppConfig, rng: R, clock: C) -> Self {
        let storage = JsonStorage::new(config.data_path.clone());
        let report = BalanceReport::new(clock, config.report_path.clone());

        Self {
            config,
            database: ClientDatabase::new(),
            storage,
            report,
            rng
        }
    }

    pub fn database(&self) -> &ClientDatabase {
        &self.database
    }

    pub fn generate_test_data<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let count = self.config.client_count;
        writeln!(output, "Generare date pentru {count} clienți ai băncii...")?;

        self.database.extend(generate_clients(&mut self.rng, count));
        info!("Generated {count} clients");

        Ok(())
    }

    /// Persists the current clients.
    ///
    /// # Errors
    /// A write failure is returned as-is since the later steps expect the file to exist.
    pub fn save<W: Write>(&self, output: &mut W) -> Result<()> {
        self.database.save_to(&self.storage)?;
        writeln!(output, "Datele au fost salvate în fișierul {}", self.storage.location().display())?;

        Ok(())
    }

    /// Replaces the in-memory clients with the saved ones, if a saved file exists.
    ///
    /// A missing, unreadable or malformed file is reported on the console, leaves the current
    /// clients untouched and returns `Ok(false)`.
    pub fn load_existing<W: Write>(&mut self, output: &mut W) -> Result<bool> {
        let location = self.storage.location().display();

        match self.database.load_from(&self.storage) {
            Ok(true) => {
                writeln!(output, "Datele au fost încărcate din fișierul {location}")?;
                Ok(true)
            }
            Ok(false) => {
                writeln!(output, "Fișierul {location} nu există.")?;
                Ok(false)
            }
            Err(error @ (StorageError::Parse { .. } | StorageError::Io { .. })) => {
                warn!("{error}");
                writeln!(output, "Fișierul {location} nu poate fi citit: {error}")?;
                Ok(false)
            }
            Err(error) => Err(error.into())
        }
    }

    pub fn display_clients<W: Write>(&self, output: &mut W) -> Result<()> {
        let clients = self.database.clients();
        let max_to_display = self.config.max_to_display;

        writeln!(output)?;
        writeln!(output, "Primii clienți din baza de date:")?;

        for (index, client) in clients.iter().take(max_to_display).enumerate() {
            writeln!(output, "{}. {client}", index + 1)?;
        }

        if clients.len() > max_to_display {
            writeln!(output, "... și încă {} clienți.", clients.len() - max_to_display)?;
        }

        Ok(())
    }

    pub fn generate_report<W: Write>(&self, output: &mut W) -> Result<Vec<ClientRecord>> {
        let threshold = self.config.threshold;
        let below_threshold = self.report.generate(self.database.clients(), threshold)?;

        writeln!(output, "Raport generat în fișierul {}", self.report.path().display())?;
        writeln!(output, "Numărul total de clienți cu sold sub {} lei: {}", threshold.trimmed(), below_threshold.len())?;

        Ok(below_threshold)
    }

    pub fn run<W: Write>(&mut self, output: &mut W) -> Result<Vec<ClientRecord>> {
        self.generate_test_data(output)?;
        self.save(output)?;
        self.display_clients(output)?;
        let below_threshold = self.generate_report(output)?;

        writeln!(output)?;
        writeln!(output, "Raportul a fost generat cu succes!")?;
        output.flush()?;

        debug!("Run finished with {} of {} clients below threshold", below_threshold.len(), self.database.len());

        Ok(below_threshold)
    }
}
