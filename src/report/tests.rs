use super::{write_report, BalanceReport, Clock, FixedClock, ReportError};

use anyhow::{anyhow, Result};
use std::fs;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::tempdir;

use crate::models::ClientRecord;
use crate::types::{ClientId, Monetary};

fn fixed_instant() -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|date| date.and_hms_opt(9, 7, 3))
        .ok_or_else(|| anyhow!("invalid fixed instant"))
}

fn create_client(id: ClientId, balance: &str) -> Result<ClientRecord> {
    Ok(ClientRecord {
        id,
        last_name: "Georgescu".to_string(),
        first_name: "Andrei".to_string(),
        iban: format!("RO49AAAA{:016}", id),
        balance: Monetary::from_str(balance)?
    })
}

#[test]
fn test_fixed_clock_returns_the_same_instant() -> Result<()> {
    let clock = FixedClock(fixed_instant()?);

    assert_eq!(clock.now(), fixed_instant()?);
    assert_eq!(clock.now(), clock.now());

    Ok(())
}

#[test]
fn test_report_lists_only_clients_below_threshold() -> Result<()> {
    let directory = tempdir()?;
    let report = BalanceReport::new(FixedClock(fixed_instant()?), directory.path().join("report_low_balance.txt"));
    let clients = vec![
        create_client(1, "50.0")?,
        create_client(2, "15000.0")?,
        create_client(3, "9999.99")?,
    ];

    let below = report.generate(&clients, Monetary::from_units(10000))?;
    let content = fs::read_to_string(report.path())?;

    let expected = format!(
        "Raport generat la data: 05-03-2024 09:07:03\n\
         Clienți cu sold sub 10000 lei\n\
         {}\n\
         \n\
         ID: 1\n\
         Nume complet: Georgescu Andrei\n\
         IBAN: RO49AAAA0000000000000001\n\
         Sold: 50.00 lei\n\
         {}\n\
         ID: 3\n\
         Nume complet: Georgescu Andrei\n\
         IBAN: RO49AAAA0000000000000003\n\
         Sold: 9999.99 lei\n\
         {}\n",
        "=".repeat(80),
        "-".repeat(40),
        "-".repeat(40)
    );

    assert_eq!(content, expected);
    assert_eq!(below.iter().map(|client| client.id).collect::<Vec<_>>(), vec![1, 3]);

    Ok(())
}

#[test]
fn test_report_with_no_qualifying_clients_writes_header_only() -> Result<()> {
    let directory = tempdir()?;
    let report = BalanceReport::new(FixedClock(fixed_instant()?), directory.path().join("report_low_balance.txt"));
    let clients = vec![create_client(1, "15000")?];

    let below = report.generate(&clients, Monetary::from_units(10000))?;
    let content = fs::read_to_string(report.path())?;

    assert!(below.is_empty());
    assert_eq!(content, format!(
        "Raport generat la data: 05-03-2024 09:07:03\nClienți cu sold sub 10000 lei\n{}\n\n",
        "=".repeat(80)
    ));

    Ok(())
}

#[test]
fn test_write_report_renders_into_any_writer() -> Result<()> {
    let mut buffer = Vec::new();
    let clients = vec![create_client(4, "250.5")?];

    write_report(&mut buffer, &clients, Monetary::from_units(300), fixed_instant()?)?;
    let content = String::from_utf8(buffer)?;

    assert!(content.contains("Clienți cu sold sub 300 lei\n"));
    assert!(content.contains("ID: 4\nNume complet: Georgescu Andrei\nIBAN: RO49AAAA0000000000000004\nSold: 250.50 lei\n"));
    assert_eq!(content.lines().count(), 9);

    Ok(())
}

#[test]
fn test_report_header_prints_threshold_without_trailing_zeros() -> Result<()> {
    let mut buffer = Vec::new();

    write_report(&mut buffer, &[], Monetary::from_str("9999.50")?, fixed_instant()?)?;
    let content = String::from_utf8(buffer)?;

    assert_eq!(content.lines().nth(1), Some("Clienți cu sold sub 9999.5 lei"));

    Ok(())
}

#[test]
fn test_report_fails_when_path_is_not_writable() -> Result<()> {
    let directory = tempdir()?;
    let report = BalanceReport::new(FixedClock(fixed_instant()?), directory.path().join("missing").join("report.txt"));

    let result = report.generate(&[], Monetary::from_units(10000));

    assert!(matches!(result, Err(ReportError::Io { .. })));

    Ok(())
}
