// tests/table_view.rs
use prod_report::gui::table_model::{SortDir, TableView};
use prod_report::sheet::{Cell, Sheet};

fn sheet(n: usize) -> Sheet {
    let mut s = Sheet::with_headers(&["Código", "Descripción", "Días"]);
    for i in 0..n {
        s.push(vec![
            Cell::text(format!("P-{i:03}")),
            Cell::text(if i % 2 == 0 { "Caja" } else { "Bolsa X" }),
            Cell::number((n - i) as f64),
        ]);
    }
    s
}

fn first_col(view: &TableView) -> Vec<String> {
    view.page_rows().iter().map(|r| r[0].as_text()).collect()
}

#[test]
fn pages_hold_twenty_rows() {
    let mut view = TableView::from_sheet(&sheet(45));
    assert_eq!(view.total_rows(), 45);
    assert_eq!(view.page_count(), 3);
    assert_eq!(view.page_rows().len(), 20);

    view.next_page();
    view.next_page();
    view.next_page();
    assert_eq!(view.page(), 2);
    assert_eq!(view.page_rows().len(), 5);

    view.prev_page();
    assert_eq!(view.page(), 1);
}

#[test]
fn empty_sheet_still_has_one_page() {
    let view = TableView::from_sheet(&Sheet::with_headers(&["A"]));
    assert_eq!(view.page_count(), 1);
    assert!(view.page_rows().is_empty());
    assert_eq!(view.ncols(), 1);
}

#[test]
fn filter_is_case_insensitive_and_resets_the_page() {
    let mut view = TableView::from_sheet(&sheet(45));
    view.next_page();
    view.set_filter("  bolsa   x ");
    assert_eq!(view.page(), 0);
    assert_eq!(view.visible_len(), 22);
    assert!(first_col(&view).iter().all(|c| {
        let n: usize = c[2..].parse().unwrap();
        n % 2 == 1
    }));

    view.set_filter("");
    assert_eq!(view.visible_len(), 45);
}

#[test]
fn numbers_sort_by_value() {
    let mut s = Sheet::with_headers(&["Código", "Cant"]);
    for (code, n) in [("a", "9"), ("b", "10"), ("c", "100")] {
        s.push(vec![Cell::text(code), Cell::text(n)]);
    }
    let mut view = TableView::from_sheet(&s);
    view.toggle_sort(1);
    assert_eq!(view.sort(), Some((1, SortDir::Asc)));
    assert_eq!(first_col(&view), ["a", "b", "c"]);

    view.toggle_sort(1);
    assert_eq!(view.sort(), Some((1, SortDir::Desc)));
    assert_eq!(first_col(&view), ["c", "b", "a"]);
}

#[test]
fn visible_sheet_keeps_filter_and_order() {
    let mut view = TableView::from_sheet(&sheet(4));
    view.set_filter("caja");
    view.toggle_sort(2);
    let out = view.visible_sheet();
    assert_eq!(out.headers().unwrap(), ["Código", "Descripción", "Días"]);
    let codes: Vec<String> = out.data().iter().map(|r| r[0].as_text()).collect();
    assert_eq!(codes, ["P-002", "P-000"]);
}

#[test]
fn reloading_keeps_the_filter() {
    let mut view = TableView::from_sheet(&sheet(10));
    view.set_filter("caja");
    view.toggle_sort(0);
    view.load(&sheet(6));
    assert_eq!(view.filter(), "caja");
    assert_eq!(view.sort(), None);
    assert_eq!(view.visible_len(), 3);
}
