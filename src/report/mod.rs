mod balance_report;
mod clock;
mod errors;
#[cfg(test)]
mod tests;

pub use balance_report::{write_report, BalanceReport};
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::ReportError;

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
pub const HEADER_SEPARATOR_WIDTH: usize = 80;
pub const RECORD_SEPARATOR_WIDTH: usize = 40;
