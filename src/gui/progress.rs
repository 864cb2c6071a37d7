// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    last: String,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, last: s!() }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Procesando…");
    }
    fn log(&mut self, msg: &str) {
        self.last = s!(msg);
        self.set_status(format!("Error: {msg}"));
    }
    fn step_done(&mut self, label: &str) {
        self.done += 1;
        self.last = s!(label);
        self.set_status(format!("{label} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        // keep the last message (result or error) on screen
        if self.last.is_empty() {
            self.set_status("Listo");
        }
    }
}
