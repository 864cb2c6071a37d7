// tests/store.rs
use std::fs;
use std::path::PathBuf;

use prod_report::backend::http::error_message;
use prod_report::config::options::ReportKind;
use prod_report::core::sanitize::{normalize_ws, sanitize_filename};
use prod_report::sheet::{Cell, Sheet};
use prod_report::store::Store;

fn tmp_store(name: &str) -> Store {
    let mut p: PathBuf = std::env::temp_dir();
    p.push(format!("prod_report_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    Store::new(p)
}

#[test]
fn token_round_trip_and_logout() {
    let store = tmp_store("token");
    assert_eq!(store.load_token(), None);

    store.save_token("  abc.def \n").unwrap();
    assert_eq!(store.load_token().as_deref(), Some("abc.def"));

    store.clear_token().unwrap();
    assert_eq!(store.load_token(), None);
    // clearing twice is fine
    store.clear_token().unwrap();
}

#[test]
fn cached_sheets_come_back_as_text() {
    let store = tmp_store("sheets");
    assert!(store.load_sheet(ReportKind::Resumen).unwrap().is_none());

    let mut sheet = Sheet::with_headers(&["Grupo (M)", "Cantidad de Filas de Datos"]);
    sheet.push(vec![Cell::text("M1"), Cell::number(3.0)]);
    store.save_sheet(ReportKind::Resumen, &sheet).unwrap();

    let back = store.load_sheet(ReportKind::Resumen).unwrap().unwrap();
    assert_eq!(back.rows[1], vec![Cell::text("M1"), Cell::text("3")]);
    assert!(store.root().join("resumen.csv").exists());
}

#[test]
fn file_stems_are_safe() {
    assert_eq!(sanitize_filename("2026-10-18 09:30:00", "x"), "2026-10-18_09_30_00");
    assert_eq!(sanitize_filename("../a/b", "x"), "ab");
    assert_eq!(sanitize_filename("///", "historial"), "historial");
}

#[test]
fn whitespace_collapses() {
    assert_eq!(normalize_ws("  Caja \t  grande\n"), "Caja grande");
}

#[test]
fn server_messages_are_extracted() {
    assert_eq!(error_message(r#"{"detail":"Token expirado"}"#).as_deref(), Some("Token expirado"));
    assert_eq!(error_message(r#"{"message":"Sin permiso"}"#).as_deref(), Some("Sin permiso"));
    assert_eq!(error_message(r#"{"error":"Fecha inválida"}"#).as_deref(), Some("Fecha inválida"));
    assert_eq!(error_message("  Bad Gateway  ").as_deref(), Some("Bad Gateway"));
    assert_eq!(error_message("").as_deref(), None);
}
