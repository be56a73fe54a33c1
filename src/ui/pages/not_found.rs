use eframe::egui::{RichText, Ui};

use crate::route::Route;

// ---------------------------------------------------------------------------
// Not-found fallbacks
// ---------------------------------------------------------------------------

/// Shown when a detail id is absent from the dataset.
pub fn faculty_not_found(ui: &mut Ui) -> Option<Route> {
    let mut next_route = None;
    ui.add_space(40.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Faculty Not Found");
        ui.label(
            RichText::new("The requested faculty member could not be found.").weak(),
        );
        ui.add_space(8.0);
        if ui.button("Back to Faculty").clicked() {
            next_route = Some(Route::Faculty);
        }
    });
    next_route
}

/// Shown when a path resolves to no view.
pub fn page_not_found(ui: &mut Ui, path: &str) -> Option<Route> {
    let mut next_route = None;
    ui.add_space(40.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Page Not Found");
        ui.label(RichText::new(format!("No view exists for {path}")).weak());
        ui.add_space(8.0);
        if ui.button("Back to Home").clicked() {
            next_route = Some(Route::Home);
        }
    });
    next_route
}
