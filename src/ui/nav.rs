use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export;
use crate::route::Route;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – title, navigation, year selector, export menu
// ---------------------------------------------------------------------------

const NAV_ROUTES: [Route; 4] = [
    Route::Home,
    Route::Departments,
    Route::Faculty,
    Route::DataSources,
];

/// Render the navigation bar. Returns the route a click requested, if any.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) -> Option<Route> {
    let mut next_route = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("UC Faculty Transparency");
        ui.label(RichText::new("Salary & Teaching Data Report").weak().small());
        ui.separator();

        for route in NAV_ROUTES {
            let active = state.route.nav_label() == route.nav_label();
            if ui.selectable_label(active, route.nav_label()).clicked() {
                next_route = Some(route.clone());
            }
        }

        ui.separator();

        // ---- Academic year selector ----
        let years = state.dataset.years.clone();
        egui::ComboBox::from_id_salt("year_select")
            .selected_text(state.selected_year.to_string())
            .width(70.0)
            .show_ui(ui, |ui: &mut Ui| {
                for year in years {
                    ui.selectable_value(&mut state.selected_year, year, year.to_string());
                }
            });

        ui.separator();

        // ---- Export menu ----
        ui.menu_button("Export", |ui: &mut Ui| {
            if ui.button("Faculty table…").clicked() {
                export_dialog(state, ExportTable::Faculty);
                ui.close_menu();
            }
            if ui.button("Department table…").clicked() {
                export_dialog(state, ExportTable::Departments);
                ui.close_menu();
            }
        });

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().weak_text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });

    next_route
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum ExportTable {
    Faculty,
    Departments,
}

pub fn export_dialog(state: &mut AppState, table: ExportTable) {
    let default_name = match table {
        ExportTable::Faculty => "faculty.csv",
        ExportTable::Departments => "departments.csv",
    };

    let file = rfd::FileDialog::new()
        .set_title("Export dataset")
        .set_file_name(default_name)
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        let result = match table {
            ExportTable::Faculty => export::export_records(&path, &state.dataset.faculty),
            ExportTable::Departments => export::export_records(&path, &state.dataset.departments),
        };
        match result {
            Ok(()) => {
                log::info!("exported {table:?} table to {}", path.display());
                state.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
