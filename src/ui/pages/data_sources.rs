use eframe::egui::{Color32, RichText, Ui};

use crate::data::sources::{self, SourceStatus};
use crate::route::Route;
use crate::state::AppState;
use crate::ui::nav::{export_dialog, ExportTable};
use crate::ui::widgets::{badge, stat_card};

// ---------------------------------------------------------------------------
// Data sources & methodology
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<Route> {
    ui.heading("Data Sources & Methodology");
    ui.label(
        RichText::new(
            "Transparent documentation of all data sources, collection methods, and \
             analytical processes",
        )
        .weak(),
    );
    ui.add_space(8.0);

    let catalog = sources::catalog();
    let active = catalog
        .iter()
        .filter(|s| s.status == SourceStatus::Active)
        .count();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        let strong = ui.visuals().strong_text_color();
        stat_card(ui, &catalog.len().to_string(), "Data Sources", strong);
        stat_card(
            ui,
            &active.to_string(),
            "Active Sources",
            Color32::from_rgb(62, 152, 81),
        );
        stat_card(ui, "2014-2024", "Coverage Window", strong);
    });

    ui.add_space(12.0);

    // ---- Source catalog ----
    for source in &catalog {
        ui.group(|ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                ui.strong(source.name);
                let weak = ui.visuals().weak_text_color();
                let status_color = match source.status {
                    SourceStatus::Active => Color32::from_rgb(62, 152, 81),
                    SourceStatus::Archived => weak,
                };
                badge(ui, source.status.label(), status_color);
                badge(ui, source.format, weak);
            });
            ui.label(RichText::new(source.description).weak());
            ui.horizontal(|ui: &mut Ui| {
                ui.label(RichText::new(source.provider).small());
                ui.label(
                    RichText::new(format!("Updated {}", source.last_updated))
                        .weak()
                        .small(),
                );
                ui.label(
                    RichText::new(format!("{} records", source.record_count))
                        .weak()
                        .small(),
                );
                ui.label(
                    RichText::new(format!("Coverage {}", source.coverage))
                        .weak()
                        .small(),
                );
            });
        });
        ui.add_space(4.0);
    }

    ui.add_space(8.0);

    // ---- Methodology ----
    ui.heading("Methodology");
    ui.add_space(4.0);
    for step in sources::methodology() {
        ui.horizontal(|ui: &mut Ui| {
            ui.monospace(format!("{}.", step.step));
            ui.strong(step.title);
            ui.label(RichText::new(step.description).weak());
        });
    }

    ui.add_space(12.0);

    // ---- Downloads ----
    ui.heading("Downloads");
    ui.label(
        RichText::new("Export the report tables as CSV or JSON")
            .weak()
            .small(),
    );
    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Download faculty table…").clicked() {
            export_dialog(state, ExportTable::Faculty);
        }
        if ui.button("Download department table…").clicked() {
            export_dialog(state, ExportTable::Departments);
        }
    });

    None
}
