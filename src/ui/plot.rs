use eframe::egui::{Color32, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::history::HistoryPoint;

// ---------------------------------------------------------------------------
// Salary history chart (detail view)
// ---------------------------------------------------------------------------

/// Render the 5-year salary line for one faculty member.
pub fn salary_history_plot(ui: &mut Ui, history: &[HistoryPoint], color: Color32) {
    // History runs newest-first; plot left-to-right by year.
    let coords: Vec<[f64; 2]> = history
        .iter()
        .rev()
        .map(|p| [f64::from(p.year), p.salary])
        .collect();

    let line_points: PlotPoints = coords.clone().into();
    let marker_points: PlotPoints = coords.into();

    Plot::new("salary_history")
        .height(220.0)
        .x_axis_label("Year")
        .y_axis_label("Salary (USD)")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(line_points).name("Salary").color(color).width(2.0));
            plot_ui.points(
                Points::new(marker_points)
                    .shape(MarkerShape::Circle)
                    .radius(3.5)
                    .color(color),
            );
        });
}
