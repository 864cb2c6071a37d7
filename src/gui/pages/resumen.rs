// src/gui/pages/resumen.rs
use crate::config::options::ReportKind;
use crate::specs::resumen::HEADERS;

pub struct ResumenPage;
pub static PAGE: ResumenPage = ResumenPage;

impl super::Page for ResumenPage {
    fn kind(&self) -> ReportKind { ReportKind::Resumen }

    fn input_labels(&self) -> &'static [&'static str] { &["Archivo HTM:"] }

    fn hint(&self) -> &'static str { "Filas de datos por grupo (M)." }

    fn default_headers(&self) -> &'static [&'static str] { &HEADERS }

    fn numeric_columns(&self) -> &'static [usize] { &[1] }
}
