mod client;

pub use client::ClientRecord;

pub const IBAN_PREFIX: &str = "RO49AAAA";
pub const IBAN_RANDOM_DIGITS: usize = 16;
pub const IBAN_LENGTH: usize = IBAN_PREFIX.len() + IBAN_RANDOM_DIGITS;
