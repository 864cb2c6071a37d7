// tests/comparacion.rs
use prod_report::config::settings::ComparisonSettings;
use prod_report::sheet::Cell;
use prod_report::specs::comparacion::{
    ComparisonRecord, ReconciliationRow, build_requirements_lookup, diff_percent, is_flagged,
    reconcile, reconcile_sources, recompute_history, row_is_flagged, rows_from_sheet, to_sheet,
};

fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| Cell::text(*c)).collect()
}

#[test]
fn first_requirement_for_a_code_wins() {
    let reqs = vec![row(&["C1", "100", "P1"]), row(&["C1", "999", "P1"])];
    let lookup = build_requirements_lookup(&reqs, 0, 1);
    assert_eq!(lookup.len(), 1);
    assert_eq!(lookup["C1"], 100.0);
}

#[test]
fn requirement_values_are_locale_tolerant() {
    let reqs = vec![row(&[" C2 ", " 1 250,5 "]), row(&["", "7"]), row(&["C3", "n/a"])];
    let lookup = build_requirements_lookup(&reqs, 0, 1);
    assert_eq!(lookup["C2"], 1250.5);
    assert_eq!(lookup["C3"], 0.0);
    assert!(!lookup.contains_key(""));
}

#[test]
fn difference_is_relative_to_required_units() {
    assert_eq!(diff_percent(200.0, 150.0), Some(25.0));
    assert_eq!(diff_percent(100.0, 150.0), Some(-50.0));
    assert_eq!(diff_percent(0.0, 5.0), None);
}

#[test]
fn unmeasured_rows_are_dropped() {
    let summary = vec![
        row(&["C1", "Corte", "MO", "2", "0"]),
        row(&["C2", "Doblez", "MO", "3", "0,0"]),
        row(&["C3", "Pintura", "MO", "1", "50"]),
    ];
    let reqs = vec![row(&["C1", "100"]), row(&["C3", "100"])];
    let out = reconcile(&summary, &build_requirements_lookup(&reqs, 0, 1));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, "C3");
    assert_eq!(out[0].diff_percent, Some(50.0));
}

#[test]
fn unknown_codes_have_no_difference() {
    let summary = vec![row(&["Z9", "Nuevo", "MO", "1", "12"])];
    let out = reconcile(&summary, &build_requirements_lookup(&[], 0, 1));
    assert_eq!(out[0].required_units, 0.0);
    assert_eq!(out[0].diff_percent, None);
    assert_eq!(to_sheet(&out).data()[0][6], Cell::Empty);
}

#[test]
fn threshold_is_strictly_greater() {
    let mut r = ReconciliationRow { diff_percent: Some(25.0), ..Default::default() };
    assert!(!is_flagged(&r, 25.0));
    r.diff_percent = Some(25.01);
    assert!(is_flagged(&r, 25.0));
    r.diff_percent = None;
    assert!(!is_flagged(&r, 25.0));
}

#[test]
fn sources_skip_their_boilerplate_rows() {
    let summary = vec![
        row(&["Código", "Descripción", "Tipo", "Personas", "Tiempo"]),
        row(&["C1", "Corte", "MO", "2", "60"]),
    ];
    let requirements = vec![
        row(&["Requerimientos semana 12"]),
        row(&["Código", "Unidades"]),
        row(&["C1", "100"]),
    ];
    let out = reconcile_sources(&summary, &requirements, &ComparisonSettings::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].people_count, 2.0);
    assert_eq!(out[0].measured_time, 60.0);
    assert_eq!(out[0].required_units, 100.0);
    assert_eq!(out[0].diff_percent, Some(40.0));
}

#[test]
fn history_uses_the_live_scale() {
    let stored = ComparisonRecord {
        fecha: "2026-03-02 08:15:00".into(),
        row: ReconciliationRow {
            code: "C1".into(),
            measured_time: 80.0,
            required_units: 100.0,
            diff_percent: Some(2.0),
            ..Default::default()
        },
    };
    let rows = recompute_history(&[stored]);
    assert_eq!(rows[0].diff_percent, Some(20.0));
}

#[test]
fn stored_records_flatten_the_row() {
    let json = r#"{"fecha":"2026-03-02 08:15:00","codigo":"C1","descripcion":"Corte","tipo":"MO",
                   "cantidad_personas":2,"tiempo_medido":80,"unidades_requeridas":100,
                   "diferencia_porcentaje":null,"id":17}"#;
    let rec: ComparisonRecord = serde_json::from_str(json).unwrap();
    assert_eq!(rec.fecha, "2026-03-02 08:15:00");
    assert_eq!(rec.row.code, "C1");
    assert_eq!(rec.row.required_units, 100.0);
}

#[test]
fn sheet_shows_two_decimals_and_reads_back() {
    let summary = vec![row(&["C1", "Corte", "MO", "2", "2"])];
    let reqs = vec![row(&["C1", "3"])];
    let rows = reconcile(&summary, &build_requirements_lookup(&reqs, 0, 1));
    let sheet = to_sheet(&rows);
    assert_eq!(sheet.headers().unwrap()[6], "Diferencia (%)");
    assert_eq!(sheet.data()[0][6], Cell::number(33.33));

    let back = rows_from_sheet(&sheet);
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].code, "C1");
    assert_eq!(back[0].required_units, 3.0);
}

#[test]
fn flag_survives_the_rounded_display() {
    let summary = vec![row(&["C1", "Corte", "MO", "2", "74.996"])];
    let reqs = vec![row(&["C1", "100"])];
    let rows = reconcile(&summary, &build_requirements_lookup(&reqs, 0, 1));
    assert!(is_flagged(&rows[0], 25.0));

    let sheet = to_sheet(&rows);
    let shown = &sheet.data()[0];
    assert_eq!(shown[6], Cell::number(25.0));
    assert!(row_is_flagged(shown, 25.0));

    let exact = vec![row(&["C2", "Doblez", "MO", "1", "75"])];
    let rows = reconcile(&exact, &build_requirements_lookup(&[row(&["C2", "100"])], 0, 1));
    assert!(!row_is_flagged(&to_sheet(&rows).data()[0], 25.0));
}
