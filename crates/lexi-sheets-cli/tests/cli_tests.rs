//! CLI integration tests
//!
//! Runs the `lexi` binary against workbooks written to a temporary directory.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WORKBOOK: &str = r##"<?xml version="1.0"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <DocumentProperties xmlns="urn:schemas-microsoft-com:office:office">
  <Author>Dan Harvey</Author>
 </DocumentProperties>
 <Styles>
  <Style ss:ID="Default" ss:Name="Normal"><Font ss:FontName="Arial" ss:Size="10"/></Style>
  <Style ss:ID="s62"><Font ss:FontName="Charis SIL" ss:Size="14" ss:Color="#0000FF"/></Style>
 </Styles>
 <Worksheet ss:Name="Animals">
  <Table ss:ExpandedColumnCount="3" ss:ExpandedRowCount="3">
   <Row>
    <Cell><Data ss:Type="String">Word:eng:English</Data></Cell>
    <Cell><Data ss:Type="String">Gloss:fra:French</Data></Cell>
    <Cell><Data ss:Type="String">Example:eng::g</Data></Cell>
   </Row>
   <Row>
    <Cell><Data ss:Type="String">wolf</Data></Cell>
    <Cell><Data ss:Type="String">loup</Data></Cell>
    <Cell><Data ss:Type="String">the wolf howls</Data></Cell>
   </Row>
   <Row>
    <Cell><Data ss:Type="String">dog</Data></Cell>
    <Cell><Data ss:Type="String">chien</Data></Cell>
   </Row>
  </Table>
 </Worksheet>
</Workbook>
"##;

const BAD_HEADER: &str = r#"<Workbook>
 <Worksheet>
  <Table ss:ExpandedColumnCount="2" ss:ExpandedRowCount="2">
   <Row><Cell><Data>Gloss:fra</Data></Cell><Cell><Data>Word:eng</Data></Cell></Row>
   <Row><Cell><Data>loup</Data></Cell><Cell><Data>wolf</Data></Cell></Row>
  </Table>
 </Worksheet>
</Workbook>"#;

fn write_workbook(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn lexi() -> Command {
    Command::cargo_bin("lexi").unwrap()
}

#[test]
fn test_cli_help() {
    lexi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexi"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("headers"));
}

#[test]
fn test_cli_version() {
    lexi()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexi"));
}

#[test]
fn test_convert_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "animals.xml", WORKBOOK);

    lexi()
        .arg("convert")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": \"fra\""))
        .stdout(predicate::str::contains("\"key\": \"wolf\""))
        .stdout(predicate::str::contains("the wolf howls"))
        .stderr(predicate::str::contains("Converted 1 worksheets: 2 words, 2 languages, 1 authors"));
}

#[test]
fn test_convert_compact_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "animals.xml", WORKBOOK);
    let output = dir.path().join("animals.json");

    lexi()
        .args(["json", "--compact", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote dictionary to"));

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"key\":\"dog\""));
    assert!(json.contains("\"name\":\"Dan Harvey\""));
    assert!(!json.contains('\n'));
}

#[test]
fn test_convert_reports_header_error() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "bad.xml", BAD_HEADER);

    lexi()
        .arg("convert")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to convert"))
        .stderr(predicate::str::contains(
            "Worksheet 0: The first column field must be 'Word'",
        ));
}

#[test]
fn test_convert_strict_numbers() {
    let dir = TempDir::new().unwrap();
    let content = WORKBOOK.replace(
        r#"ss:ExpandedRowCount="3""#,
        r#"ss:ExpandedRowCount="3" ss:DefaultColumnWidth="wide""#,
    );
    let input = write_workbook(&dir, "wide.xml", &content);

    lexi().arg("convert").arg(&input).assert().success();

    lexi()
        .args(["convert", "--strict-numbers"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid default column width 'wide'"));
}

#[test]
fn test_convert_missing_file() {
    let dir = TempDir::new().unwrap();

    lexi()
        .arg("convert")
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn test_headers() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "animals.xml", WORKBOOK);

    lexi()
        .arg("headers")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Worksheet 0 (default language eng)"))
        .stdout(predicate::str::contains("Gloss"))
        .stdout(predicate::str::contains("Example"))
        .stdout(predicate::str::contains("group"));
}

#[test]
fn test_headers_invalid() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "bad.xml", BAD_HEADER);

    lexi()
        .arg("headers")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid headers"));
}

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(&dir, "animals.xml", WORKBOOK);

    lexi()
        .arg("info")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Authors: Dan Harvey"))
        .stdout(predicate::str::contains("Worksheets: 1"))
        .stdout(predicate::str::contains("[0] Animals (3 rows)"))
        .stdout(predicate::str::contains("Styles: 2"))
        .stdout(predicate::str::contains("Default font: Arial 10pt"));
}
