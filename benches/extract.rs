// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use prod_report::core::{HtmlCellSource, build_rows};
use prod_report::specs::mano_de_obra::{LayoutRules, extract_table, process_mano_de_obra};

/// Labor export look-alike: a header, then `groups` marker rows with
/// `per_group` wrapped data rows each.
fn synthetic_export(groups: usize, per_group: usize) -> String {
    let mut html = String::from("<html><body>\n");
    let mut top = 100;
    let mut div = |top: usize, left: usize, text: &str| {
        html.push_str(&format!(
            "<div style=\"position:absolute;top:{top}px;left:{left}px\">{text}</div>\n"
        ));
    };
    for (left, text) in [(10, "Componentes"), (60, "Descripción"), (150, "Units Req."), (260, "Operación"), (330, "Tiempo")] {
        div(top, left, text);
    }
    for g in 0..groups {
        top += 20;
        div(top, 10, &format!("M{g}"));
        div(top, 60, "Grupo");
        for r in 0..per_group {
            top += 20;
            div(top, 10, &format!("P-{g}-{r}"));
            div(top, 150, "0.33");
            div(top, 262, "Corte");
            div(top, 330, "12");
        }
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_export(40, 25);
    let rules = LayoutRules::standard().expect("standard rules");

    c.bench_function("html_cells", |b| {
        b.iter(|| black_box(HtmlCellSource::parse(black_box(&doc)).len()))
    });

    let source = HtmlCellSource::parse(&doc);
    c.bench_function("build_rows", |b| {
        b.iter(|| black_box(build_rows(black_box(&source)).len()))
    });

    let table = extract_table(&source, &rules).expect("header");
    c.bench_function("mano_de_obra", |b| {
        b.iter(|| black_box(process_mano_de_obra(black_box(&table), &rules).rows.len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
