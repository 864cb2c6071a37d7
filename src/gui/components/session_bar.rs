// src/gui/components/session_bar.rs
//
// Backend address and login state. Credentials never leave this bar except
// through actions::login.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut login_clicked = false;
    let mut logout_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Servidor:");
        ui.label(egui::RichText::new(&app.settings.api.base_url).monospace());
        ui.separator();

        if app.logged_in {
            ui.label("Sesión iniciada");
            if ui.add_enabled(!app.running, egui::Button::new("Cerrar sesión")).clicked() {
                logout_clicked = true;
            }
        } else {
            ui.label("Usuario:");
            ui.add(egui::TextEdit::singleline(&mut app.login_user).desired_width(120.0));
            ui.label("Contraseña:");
            let pass = ui.add(
                egui::TextEdit::singleline(&mut app.login_password)
                    .password(true)
                    .desired_width(120.0),
            );
            let enter = pass.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.add_enabled(!app.running, egui::Button::new("Iniciar sesión")).clicked() || enter {
                login_clicked = true;
            }
        }
    });

    if login_clicked {
        actions::login(app);
    }
    if logout_clicked {
        actions::logout(app);
    }
}
