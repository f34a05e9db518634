use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD: &str = "ACME CORP\nJean Dupont\njean.dupont@acme.fr\nTél. 01 23 45 67 89\n75008 PARIS\n";

fn cardscan(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardscan").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn extract_json_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD).unwrap();

    cardscan(&dir)
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""company": "ACME CORP""#))
        .stdout(predicate::str::contains(r#""personName": "Jean Dupont""#))
        .stdout(predicate::str::contains(r#""phone": "0123456789""#))
        .stdout(predicate::str::contains(r#""postalCode": "75008""#));
}

#[test]
fn extract_csv_from_stdin() {
    let dir = TempDir::new().unwrap();

    cardscan(&dir)
        .args(["extract", "-", "--format", "csv"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("company,personName,email,phone,city,postalCode"))
        .stdout(predicate::str::contains(
            "ACME CORP,Jean Dupont,jean.dupont@acme.fr,0123456789,PARIS,75008",
        ));
}

#[test]
fn extract_strict_fails_on_noise() {
    let dir = TempDir::new().unwrap();

    cardscan(&dir)
        .args(["extract", "-", "--strict"])
        .write_stdin("lorem ipsum\ndolor sit amet\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No relevant information"));

    cardscan(&dir)
        .args(["extract", "-"])
        .write_stdin("lorem ipsum\ndolor sit amet\n")
        .assert()
        .success();
}

#[test]
fn extract_missing_file() {
    let dir = TempDir::new().unwrap();

    cardscan(&dir)
        .args(["extract", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn scan_image_with_transcript() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("card.png");
    let transcript = dir.path().join("card.txt");
    fs::write(&image, [0x89, b'P', b'N', b'G', 0x0d, 0x0a]).unwrap();
    fs::write(&transcript, CARD).unwrap();

    cardscan(&dir)
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--transcript")
        .arg(&transcript)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Jean Dupont""#))
        .stdout(predicate::str::contains(r#""city": "PARIS""#))
        .stdout(predicate::str::contains(r#""cardImage": "data:image/png;base64,iVBORw0K""#));
}

#[test]
fn scan_fails_when_nothing_extracted() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("card.jpg");
    let transcript = dir.path().join("card.txt");
    fs::write(&image, [0xff, 0xd8, 0xff]).unwrap();
    fs::write(&transcript, "lorem ipsum\n").unwrap();

    cardscan(&dir)
        .arg("scan")
        .arg("--image")
        .arg(&image)
        .arg("--transcript")
        .arg(&transcript)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no relevant information"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let cards = dir.path().join("cards");
    let out = dir.path().join("out");
    fs::create_dir_all(&cards).unwrap();
    fs::write(cards.join("acme.txt"), CARD).unwrap();
    fs::write(cards.join("noise.txt"), "lorem ipsum\n").unwrap();

    cardscan(&dir)
        .arg("batch")
        .arg(format!("{}/*.txt", cards.display()))
        .arg("--output-dir")
        .arg(&out)
        .args(["--summary", "--strict", "--continue-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files"));

    assert!(out.join("acme.json").exists());
    assert!(!out.join("noise.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,company,personName"));
    assert!(summary.contains("acme.txt,success,ACME CORP,Jean Dupont"));
    assert!(summary.contains("noise.txt,error"));
}

#[test]
fn config_init_set_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let config_arg = config.to_str().unwrap();

    cardscan(&dir)
        .args(["--config", config_arg, "config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    cardscan(&dir)
        .args(["--config", config_arg, "config", "set", "extraction.company_rule", "uppercase"])
        .assert()
        .success();

    cardscan(&dir)
        .args(["--config", config_arg, "config", "get", "extraction.company_rule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"uppercase\""));

    cardscan(&dir)
        .args(["--config", config_arg, "config", "set", "extraction.unknown", "1"])
        .assert()
        .failure();

    // The uppercase rule now applies to extraction
    cardscan(&dir)
        .args(["--config", config_arg, "extract", "-", "--format", "text"])
        .write_stdin("Studio Graphique & Co\nATELIER NORD\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ATELIER NORD"));
}
