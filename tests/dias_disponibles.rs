// tests/dias_disponibles.rs
use prod_report::error::ReportError;
use prod_report::sheet::Cell;
use prod_report::specs::dias_disponibles::{
    InventoryRecord, consolidate, days_available, process_dias_disponibles, records_from_sheet,
    records_to_sheet,
};

fn row(cells: &[&str]) -> Vec<Cell> {
    cells
        .iter()
        .map(|c| if c.is_empty() { Cell::Empty } else { Cell::text(*c) })
        .collect()
}

fn export(pairs: &[(&str, &str, &str, &str, &str)]) -> Vec<Vec<Cell>> {
    let mut rows = vec![
        row(&["Inventario general", "", "", "", ""]),
        row(&["Whse", "Description", "Available", "Minimum", "Reorder"]),
    ];
    for (code, desc, avail, min, reorder) in pairs {
        rows.push(row(&["01", code, avail, min, reorder]));
        rows.push(row(&["", desc, "", "", ""]));
    }
    rows
}

#[test]
fn trailing_x_uses_the_short_multiplier() {
    assert_eq!(days_available(90, 10, "Bolsa grande X"), 135);
    assert_eq!(days_available(90, 10, "bolsa grande x "), 135);
    assert_eq!(days_available(90, 10, "Bolsa grande"), 270);
}

#[test]
fn zero_minimum_never_divides() {
    assert_eq!(days_available(90, 0, "Caja"), 0);
    assert_eq!(days_available(0, 0, "Caja X"), 0);
}

#[test]
fn pairs_become_records() {
    let rows = export(&[("A-1", "Caja X", "90", "10", "5"), ("A-2", "Bolsa", "90,4", "10", "7")]);
    let records = consolidate(&rows).unwrap();
    assert_eq!(
        records,
        vec![
            InventoryRecord {
                code: "A-2".into(),
                description: "Bolsa".into(),
                available: 90,
                minimum: 10,
                reorder: 7,
                days_available: 270,
            },
            InventoryRecord {
                code: "A-1".into(),
                description: "Caja X".into(),
                available: 90,
                minimum: 10,
                reorder: 5,
                days_available: 135,
            },
        ]
    );
}

#[test]
fn equal_descriptions_rank_by_days() {
    let rows = export(&[
        ("B-1", "Tubo", "50", "10", "0"),
        ("B-2", "Tubo", "10", "10", "0"),
        ("B-3", "Aro", "10", "0", "0"),
    ]);
    let codes: Vec<String> = consolidate(&rows).unwrap().into_iter().map(|r| r.code).collect();
    assert_eq!(codes, ["B-3", "B-2", "B-1"]);
}

#[test]
fn leftover_header_and_sentinel_pairs_are_skipped() {
    let rows = export(&[
        ("Product Number", "Descripción", "0", "0", "0"),
        ("C-1", "8:", "1", "1", "1"),
        ("C-2", "Valido", "1", "1", "1"),
    ]);
    let records = consolidate(&rows).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "C-2");
}

#[test]
fn junk_numbers_become_zero() {
    let rows = export(&[("D-1", "Pieza", "n/a", "", "x")]);
    let r = &consolidate(&rows).unwrap()[0];
    assert_eq!((r.available, r.minimum, r.reorder, r.days_available), (0, 0, 0, 0));
}

#[test]
fn header_is_searched_below_the_boilerplate_row() {
    let mut rows = export(&[("E-1", "Pieza", "3", "1", "0")]);
    rows.insert(1, row(&["Generado por ERP", "", "", "", ""]));
    assert_eq!(consolidate(&rows).unwrap().len(), 1);
}

#[test]
fn missing_columns_give_the_error_sentinel() {
    let rows = vec![
        row(&["Inventario"]),
        row(&["Description", "Available", "Minimum"]),
        row(&["F-1", "1", "1"]),
        row(&["Pieza", "", ""]),
    ];
    assert!(matches!(consolidate(&rows), Err(ReportError::MissingColumn { .. })));

    let sheet = process_dias_disponibles(&rows);
    assert!(sheet.is_error_sentinel());
    assert_eq!(sheet.rows[0], vec![Cell::text("Error")]);
    assert!(sheet.error_message().unwrap().contains("Reorder"));
}

#[test]
fn missing_anchor_and_tiny_input_are_structural() {
    let no_header = vec![row(&["x"]), row(&["a", "b"]), row(&["c", "d"])];
    assert!(matches!(consolidate(&no_header), Err(ReportError::HeaderNotFound { .. })));
    assert!(matches!(consolidate(&[row(&["x"])]), Err(ReportError::InsufficientData)));
    assert!(process_dias_disponibles(&[]).is_error_sentinel());
}

#[test]
fn no_valid_rows_gives_headers_only() {
    let rows = export(&[("C-1", "8:", "1", "1", "1")]);
    let sheet = process_dias_disponibles(&rows);
    assert!(!sheet.is_error_sentinel());
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.headers().unwrap()[5], "Días Disponibles");
}

#[test]
fn rendered_sheet_reads_back() {
    let rows = export(&[("A-1", "Caja X", "90", "10", "5")]);
    let records = consolidate(&rows).unwrap();
    let sheet = records_to_sheet(&records);
    assert_eq!(sheet.data()[0][5], Cell::from(135i64));
    assert_eq!(records_from_sheet(&sheet), records);
}

#[test]
fn blank_code_with_description_is_kept_both_ways() {
    let rows = export(&[("", "Caja", "10", "5", "1"), ("A-1", "Bolsa", "30", "10", "2")]);
    let records = consolidate(&rows).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].code, "");
    assert_eq!(records_from_sheet(&records_to_sheet(&records)), records);
}

#[test]
fn backend_json_uses_spanish_field_names() {
    let json = r#"{"codigo":"A-1","descripcion":"Caja X","disponible":90.0,"minimo":10,"reorder":5,"dias_disponibles":null}"#;
    let r: InventoryRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.available, 90);
    assert_eq!(r.days_available, 0);

    let out = serde_json::to_value(&r).unwrap();
    assert_eq!(out["codigo"], "A-1");
    assert_eq!(out["dias_disponibles"], 0);
}
