// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::mano_de_obra::PAGE,
    &pages::resumen::PAGE,
    &pages::dias_disponibles::PAGE,
    &pages::comparacion::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
