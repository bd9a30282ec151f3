mod client_generator;

pub use client_generator::{generate_client, generate_clients, generate_iban};

pub const FIRST_NAMES: [&str; 10] = [
    "Ion", "Maria", "Andrei", "Elena", "Mihai", "Ana", "George", "Ioana", "Alexandru", "Cristina"
];

pub const LAST_NAMES: [&str; 10] = [
    "Popescu", "Ionescu", "Popa", "Dumitrescu", "Stan", "Dinu", "Georgescu", "Marin", "Stoica", "Florea"
];

/// Balance bounds in bani, inclusive on both ends (100.00 and 20000.00 lei).
pub const MIN_BALANCE_CENTS: i64 = 10_000;
pub const MAX_BALANCE_CENTS: i64 = 2_000_000;
