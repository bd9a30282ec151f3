use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::{ClientId, Monetary};

/// A single synthetic bank customer.
///
/// Field order matches the JSON layout of `clients_data.json`. The wire keys keep the
/// Romanian names (`nume`, `prenume`, `sold`) so files stay readable by earlier tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// 1-based position in the batch that generated the record.
    pub id: ClientId,
    #[serde(rename = "nume")]
    pub last_name: String,
    #[serde(rename = "prenume")]
    pub first_name: String,
    pub iban: String,
    #[serde(rename = "sold")]
    pub balance: Monetary
}

impl ClientRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    pub fn is_below(&self, threshold: Monetary) -> bool {
        self.balance < threshold
    }
}

impl Display for ClientRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {} - Sold: {} lei", self.last_name, self.first_name, self.balance)
    }
}
