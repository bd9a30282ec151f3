use rand::Rng;
use tracing::debug;

use crate::generator::{FIRST_NAMES, LAST_NAMES, MAX_BALANCE_CENTS, MIN_BALANCE_CENTS};
use crate::models::{ClientRecord, IBAN_PREFIX, IBAN_RANDOM_DIGITS};
use crate::types::{ClientId, Monetary};

/// Generates `count` synthetic clients with ids `1..=count`.
///
/// All randomness is drawn from `rng`, so a seeded generator yields the same batch every time.
pub fn generate_clients<R: Rng>(rng: &mut R, count: usize) -> Vec<ClientRecord> {
    let clients: Vec<ClientRecord> = (1..=count)
        .map(|id| generate_client(rng, id))
        .collect();

    debug!("Generated {} synthetic clients", clients.len());

    clients
}

pub fn generate_client<R: Rng>(rng: &mut R, id: ClientId) -> ClientRecord {
    ClientRecord {
        id,
        last_name: pick_name(rng, &LAST_NAMES),
        first_name: pick_name(rng, &FIRST_NAMES),
        iban: generate_iban(rng),
        balance: Monetary::from_cents(rng.gen_range(MIN_BALANCE_CENTS..=MAX_BALANCE_CENTS))
    }
}

/// A Romanian-looking IBAN: the fixed prefix followed by uniformly random digits.
pub fn generate_iban<R: Rng>(rng: &mut R) -> String {
    let mut iban = String::with_capacity(IBAN_PREFIX.len() + IBAN_RANDOM_DIGITS);
    iban.push_str(IBAN_PREFIX);

    for _ in 0..IBAN_RANDOM_DIGITS {
        iban.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }

    iban
}

fn pick_name<R: Rng>(rng: &mut R, pool: &[&str]) -> String {
    pool[rng.gen_range(0..pool.len())].to_string()
}
