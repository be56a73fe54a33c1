use eframe::egui::{RichText, Ui};

use crate::color::salary_color;
use crate::data::metrics::{percent_change, salary_per_student, students_per_course};
use crate::route::Route;
use crate::state::AppState;
use crate::ui::plot::salary_history_plot;
use crate::ui::widgets::{badge, format_usd, initials, stat_card};

use super::not_found;

// ---------------------------------------------------------------------------
// Faculty detail – header, stat cards, history, teaching metrics
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState, id: &str) -> Option<Route> {
    let Some(faculty) = state.dataset.find_faculty(id) else {
        return not_found::faculty_not_found(ui);
    };
    let mut next_route = None;

    if ui.button("← Back to Faculty").clicked() {
        next_route = Some(Route::Faculty);
    }
    ui.add_space(8.0);

    // ---- Header ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label(
            RichText::new(initials(&faculty.name))
                .heading()
                .monospace(),
        );
        ui.vertical(|ui: &mut Ui| {
            ui.heading(&faculty.name);
            ui.label(RichText::new(&faculty.title).weak());
            ui.horizontal(|ui: &mut Ui| {
                let strong = ui.visuals().strong_text_color();
                let weak = ui.visuals().weak_text_color();
                badge(ui, &faculty.department, strong);
                badge(
                    ui,
                    &faculty.campus,
                    state.campus_colors.color_for(&faculty.campus),
                );
                badge(ui, &faculty.year.to_string(), weak);
            });
        });
    });

    ui.add_space(12.0);

    // ---- Key metrics ----
    let per_student = salary_per_student(faculty.salary, faculty.students_count);
    let per_course = students_per_course(faculty.students_count, faculty.courses_count);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        let strong = ui.visuals().strong_text_color();
        stat_card(
            ui,
            &format_usd(faculty.salary),
            "Annual Salary",
            salary_color(faculty.salary),
        );
        stat_card(
            ui,
            &faculty.students_count.to_string(),
            "Students Taught",
            strong,
        );
        stat_card(
            ui,
            &faculty.courses_count.to_string(),
            "Courses Teaching",
            strong,
        );
        stat_card(ui, &format_usd(per_student), "Salary per Student", strong);
    });

    ui.add_space(12.0);

    // ---- Salary history (synthetic series cached on navigation) ----
    if let Some(detail) = state.detail.as_ref().filter(|d| d.id == id) {
        ui.group(|ui: &mut Ui| {
            ui.strong("Salary History");
            ui.label(RichText::new("5-year salary trend").weak().small());
            ui.add_space(4.0);

            salary_history_plot(
                ui,
                &detail.history,
                state.campus_colors.color_for(&faculty.campus),
            );
            ui.add_space(4.0);

            for (i, point) in detail.history.iter().enumerate() {
                ui.horizontal(|ui: &mut Ui| {
                    ui.monospace(point.year.to_string());
                    ui.strong(format_usd(point.salary));
                    if i > 0 {
                        let change =
                            percent_change(detail.history[i - 1].salary, point.salary);
                        ui.label(RichText::new(format!("{change:.1}% change")).weak().small());
                    }
                });
            }

            if let (Some(newest), Some(oldest)) =
                (detail.history.first(), detail.history.last())
            {
                let growth = percent_change(oldest.salary, newest.salary);
                ui.add_space(4.0);
                ui.label(RichText::new("5-Year Growth").weak().small());
                ui.strong(format!("{growth:+.1}%"));
            }
        });
        ui.add_space(12.0);
    }

    // ---- Teaching metrics ----
    ui.group(|ui: &mut Ui| {
        ui.strong("Teaching Metrics");
        ui.label(
            RichText::new("Current academic year performance")
                .weak()
                .small(),
        );
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui: &mut Ui| {
            let strong = ui.visuals().strong_text_color();
            stat_card(ui, &faculty.courses_count.to_string(), "Courses", strong);
            stat_card(
                ui,
                &faculty.credit_hours.to_string(),
                "Credit Hours",
                strong,
            );
            stat_card(
                ui,
                &faculty.students_count.to_string(),
                "Total Students",
                strong,
            );
            stat_card(ui, &per_course.to_string(), "Students/Course", strong);
        });
        ui.add_space(4.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Teaching Efficiency");
            ui.strong(format!("{}/student", format_usd(per_student)));
        });
    });

    next_route
}
