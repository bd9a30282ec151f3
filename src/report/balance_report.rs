use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::models::ClientRecord;
use crate::report::{Clock, ReportError, HEADER_SEPARATOR_WIDTH, RECORD_SEPARATOR_WIDTH, TIMESTAMP_FORMAT};
use crate::storage::filter_below_threshold;
use crate::types::Monetary;

/// Writes the low-balance report to a fixed path, stamped by the given clock.
pub struct BalanceReport<C: Clock> {
    clock: C,
    path: PathBuf
}

impl<C: Clock> BalanceReport<C> {
    pub fn new(clock: C, path: impl Into<PathBuf>) -> Self {
        Self {
            clock,
            path: path.into()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the report for every client below `threshold` and returns those clients.
    ///
    /// # Errors
    /// Returns `ReportError::Io` if the file cannot be created or written.
    pub fn generate(&self, clients: &[ClientRecord], threshold: Monetary) -> Result<Vec<ClientRecord>, ReportError> {
        let below_threshold = filter_below_threshold(clients, threshold);
        let io_error = |source| ReportError::Io { path: self.path.clone(), source };

        let file = File::create(&self.path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);

        write_report(&mut writer, &below_threshold, threshold, self.clock.now()).map_err(io_error)?;
        writer.flush().map_err(io_error)?;

        info!("Report with {} clients below {threshold} written to [{}]", below_threshold.len(), self.path.display());

        Ok(below_threshold)
    }
}

/// Renders the report body for clients that were already filtered.
pub fn write_report<W: Write>(writer: &mut W, clients: &[ClientRecord], threshold: Monetary, generated_at: NaiveDateTime) -> std::io::Result<()> {
    writeln!(writer, "Raport generat la data: {}", generated_at.format(TIMESTAMP_FORMAT))?;
    writeln!(writer, "Clienți cu sold sub {} lei", threshold.trimmed())?;
    writeln!(writer, "{}", "=".repeat(HEADER_SEPARATOR_WIDTH))?;
    writeln!(writer)?;

    for client in clients {
        writeln!(writer, "ID: {}", client.id)?;
        writeln!(writer, "Nume complet: {}", client.full_name())?;
        writeln!(writer, "IBAN: {}", client.iban)?;
        writeln!(writer, "Sold: {} lei", client.balance)?;
        writeln!(writer, "{}", "-".repeat(RECORD_SEPARATOR_WIDTH))?;
    }

    Ok(())
}
