use std::fs;
use std::process::Command;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_cli_writes_client_data_and_report() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-clients");
    let directory = tempdir()?;

    let output = Command::new(binary_path)
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());

    let content = fs::read_to_string(directory.path().join("clients_data.json"))?;
    let clients: Vec<Value> = serde_json::from_str(&content)?;

    assert_eq!(clients.len(), 50);
    assert!(content.starts_with("[\n    {\n        \"id\": 1,"));

    for (index, client) in clients.iter().enumerate() {
        let mut fields: Vec<&str> = client.as_object()
            .ok_or_else(|| anyhow!("client {index} is not an object"))?
            .keys()
            .map(String::as_str)
            .collect();

        fields.sort();
        assert_eq!(fields, vec!["iban", "id", "nume", "prenume", "sold"]);

        assert_eq!(client["id"].as_u64(), Some(index as u64 + 1));

        let balance = client["sold"].as_f64().ok_or_else(|| anyhow!("sold is not a number"))?;
        assert!((100.0..=20000.0).contains(&balance));

        let iban = client["iban"].as_str().ok_or_else(|| anyhow!("iban is not a string"))?;
        assert_eq!(iban.len(), 24);
        assert!(iban.starts_with("RO49AAAA"));
    }

    let report = fs::read_to_string(directory.path().join("report_low_balance.txt"))?;
    let below_threshold = clients.iter()
        .filter(|client| client["sold"].as_f64().is_some_and(|balance| balance < 10000.0))
        .count();

    assert!(report.starts_with("Raport generat la data: "));
    assert!(report.contains("Clienți cu sold sub 10000 lei\n"));
    assert_eq!(report.matches("ID: ").count(), below_threshold);

    Ok(())
}

#[test]
fn test_cli_prints_listing_to_stdout() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-clients");
    let directory = tempdir()?;

    let output = Command::new(binary_path)
        .arg("info")
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let listing: Vec<&str> = stdout.lines()
        .filter(|line| line.contains(" - Sold: ") && line.ends_with(" lei"))
        .collect();

    assert_eq!(listing.len(), 50);
    assert!(listing[0].starts_with("1. "));
    assert!(listing[49].starts_with("50. "));
    assert!(stdout.contains("Datele au fost salvate în fișierul clients_data.json\n"));
    assert!(stdout.trim_end().ends_with("Raportul a fost generat cu succes!"));

    Ok(())
}

#[test]
fn test_cli_falls_back_to_error_logging_on_unknown_level() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-clients");
    let directory = tempdir()?;

    let output = Command::new(binary_path)
        .arg("loud")
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Ignoring log level 'loud'"));
    assert!(directory.path().join("report_low_balance.txt").exists());

    Ok(())
}

#[test]
fn test_cli_accepts_level_names_in_any_case() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-clients");
    let directory = tempdir()?;

    let output = Command::new(binary_path)
        .arg("DEBUG")
        .current_dir(directory.path())
        .output()?;

    assert!(output.status.success());
    assert!(!String::from_utf8(output.stderr)?.contains("Ignoring log level"));

    Ok(())
}

#[test]
fn test_cli_rejects_extra_arguments() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_bank-clients");
    let directory = tempdir()?;

    let output = Command::new(binary_path)
        .args(["info", "unexpected"])
        .current_dir(directory.path())
        .output()?;

    assert!(!output.status.success());
    assert!(!directory.path().join("clients_data.json").exists());

    Ok(())
}
