// src/gui/pages/mano_de_obra.rs
use crate::config::options::ReportKind;

pub struct ManoDeObraPage;
pub static PAGE: ManoDeObraPage = ManoDeObraPage;

impl super::Page for ManoDeObraPage {
    fn kind(&self) -> ReportKind { ReportKind::ManoDeObra }

    fn input_labels(&self) -> &'static [&'static str] { &["Archivo HTM:"] }

    fn hint(&self) -> &'static str {
        "Exportación de mano de obra (.htm). La primera columna es el grupo (M)."
    }

    // Real headers come from the document itself.
    fn default_headers(&self) -> &'static [&'static str] { &["Grupo (M)"] }
}
