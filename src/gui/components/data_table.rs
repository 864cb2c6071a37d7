// src/gui/components/data_table.rs
//
// Draws the live table from App::view: filter box, click-to-sort headers,
// one page of rows, pager. Purely a view over TableView.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::{app::App, table_model::SortDir};
use crate::sheet::Cell;

fn column_width(ci: usize) -> f32 {
    match ci {
        0 => 110.0,
        1 => 280.0,
        _ => 100.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    // --- Filter + counts ---
    ui.horizontal(|ui| {
        ui.label("Filtrar:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.filter_text).desired_width(220.0))
            .changed()
        {
            app.view.set_filter(&app.state.gui.filter_text);
            logd!("UI: filter → {:?} ({} rows)", app.view.filter(), app.view.visible_len());
        }
        ui.label(format!("{} de {} filas", app.view.visible_len(), app.view.total_rows()));
    });

    // Rows are few (one page); own them so the closures can borrow app freely.
    let cols = app.view.ncols();
    let headers = app.view.headers.clone();
    let rows: Vec<Vec<Cell>> = app.view.page_rows().into_iter().map(<[Cell]>::to_vec).collect();
    let sort = app.view.sort();
    let numeric = page.numeric_columns();
    let mut sort_clicked: Option<usize> = None;

    let pager_h = 28.0;
    let avail_h = (ui.available_height() - pager_h).max(120.0);

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h)
                .id_salt(("table_state", page.kind().key(), cols));
            for ci in 0..cols {
                table = table.column(Column::initial(column_width(ci)).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            let arrow = match sort {
                                Some((c, SortDir::Asc)) if c == ci => " ▲",
                                Some((c, SortDir::Desc)) if c == ci => " ▼",
                                _ => "",
                            };
                            let name = headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                            let label = egui::Label::new(RichText::new(join!(name, arrow)).strong())
                                .selectable(false)
                                .sense(egui::Sense::click());
                            if ui.add(label).on_hover_text("Ordenar").clicked() {
                                sort_clicked = Some(ci);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let data = &rows[row.index()];
                        let color = page.row_color(data, &app.settings);
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let Some(cell) = data.get(ci) else { return };
                                let mut rt = RichText::new(cell.as_text());
                                if let Some(c) = color {
                                    rt = rt.color(c);
                                }
                                if numeric.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });

    if let Some(ci) = sort_clicked {
        app.view.toggle_sort(ci);
        logd!("UI: sort → {:?}", app.view.sort());
    }

    // --- Pager ---
    ui.horizontal(|ui| {
        if ui.add_enabled(app.view.page() > 0, egui::Button::new("◀")).clicked() {
            app.view.prev_page();
        }
        ui.label(format!("Página {} de {}", app.view.page() + 1, app.view.page_count()));
        if ui.add_enabled(app.view.page() + 1 < app.view.page_count(), egui::Button::new("▶")).clicked() {
            app.view.next_page();
        }
    });
}
