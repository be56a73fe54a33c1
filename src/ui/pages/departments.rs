use eframe::egui::{self, RichText, Ui};

use crate::color::salary_color;
use crate::data::model::field;
use crate::data::query;
use crate::route::Route;
use crate::state::AppState;
use crate::ui::widgets::{badge, format_usd, stat_card};

// ---------------------------------------------------------------------------
// Department analysis – filters, summary cards, sortable table
// ---------------------------------------------------------------------------

const SORT_OPTIONS: [(&str, &str); 4] = [
    (field::AVERAGE_SALARY, "Average Salary"),
    (field::TOTAL_FACULTY, "Faculty Count"),
    (field::TOTAL_STUDENTS, "Students Taught"),
    (field::SALARY_PER_STUDENT, "Salary per Student"),
];

const COLUMNS: [(&str, &str); 7] = [
    (field::DEPARTMENT, "Department"),
    (field::CAMPUS, "Campus"),
    (field::AVERAGE_SALARY, "Avg Salary"),
    (field::TOTAL_FACULTY, "Faculty"),
    (field::TOTAL_COURSES, "Courses"),
    (field::TOTAL_STUDENTS, "Students"),
    (field::SALARY_PER_STUDENT, "$/Student"),
];

pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<Route> {
    ui.heading("Department Analysis");
    ui.label(
        RichText::new(
            "Compare faculty compensation and teaching metrics across UC departments and campuses",
        )
        .weak(),
    );
    ui.add_space(8.0);

    // ---- Filters ----
    let campuses = state.dataset.campuses.clone();
    let view = &mut state.departments_view;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Campus");
        egui::ComboBox::from_id_salt("dept_campus")
            .selected_text(view.campus.clone())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut view.campus, query::ALL.to_string(), "All Campuses");
                for campus in &campuses {
                    ui.selectable_value(&mut view.campus, campus.clone(), campus);
                }
            });

        ui.label("Search");
        ui.add(
            egui::TextEdit::singleline(&mut view.search)
                .hint_text("Search departments…")
                .desired_width(180.0),
        );

        ui.label("Sort By");
        let sort_label = SORT_OPTIONS
            .iter()
            .find(|(key, _)| *key == view.sort_key)
            .map(|(_, label)| *label)
            .unwrap_or("Average Salary");
        egui::ComboBox::from_id_salt("dept_sort")
            .selected_text(sort_label)
            .show_ui(ui, |ui: &mut Ui| {
                for (key, label) in SORT_OPTIONS {
                    ui.selectable_value(&mut view.sort_key, key.to_string(), label);
                }
            });
    });

    ui.add_space(8.0);

    // ---- Query + summary over the filtered set ----
    let filters = state.departments_view.predicates();
    let rows = query::query(
        &state.dataset.departments,
        &filters,
        &state.departments_view.sort_key,
        state.departments_view.sort_direction,
    );

    let avg_salary = query::mean(&rows, field::AVERAGE_SALARY).round();
    let total_faculty = query::sum(&rows, field::TOTAL_FACULTY);
    let avg_per_student = query::mean(&rows, field::SALARY_PER_STUDENT).round();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        let strong = ui.visuals().strong_text_color();
        stat_card(ui, &rows.len().to_string(), "Departments", strong);
        stat_card(ui, &format_usd(avg_salary), "Avg Salary", salary_color(avg_salary));
        stat_card(
            ui,
            &format!("{}", total_faculty as u64),
            "Total Faculty",
            strong,
        );
        stat_card(ui, &format_usd(avg_per_student), "Avg $/Student", strong);
    });

    ui.add_space(8.0);
    ui.strong(format!("Showing {} departments", rows.len()));
    ui.add_space(4.0);

    // ---- Table; header clicks re-sort ----
    let mut sort_clicked = None;
    egui::Grid::new("departments_table")
        .striped(true)
        .min_col_width(80.0)
        .show(ui, |ui: &mut Ui| {
            for (key, label) in COLUMNS {
                let marker = if state.departments_view.sort_key == key {
                    match state.departments_view.sort_direction {
                        query::SortDirection::Ascending => " ▲",
                        query::SortDirection::Descending => " ▼",
                    }
                } else {
                    ""
                };
                if ui
                    .button(RichText::new(format!("{label}{marker}")).strong())
                    .clicked()
                {
                    sort_clicked = Some(key);
                }
            }
            ui.end_row();

            for dept in &rows {
                ui.strong(&dept.department);
                badge(ui, &dept.campus, state.campus_colors.color_for(&dept.campus));
                ui.monospace(format_usd(dept.average_salary));
                ui.label(dept.total_faculty.to_string());
                ui.label(dept.total_courses.to_string());
                ui.label(dept.total_students.to_string());
                ui.monospace(format!("${:.0}", dept.salary_per_student));
                ui.end_row();
            }
        });

    if rows.is_empty() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong("No Departments Found");
            ui.label(RichText::new("Try adjusting your search criteria or filters").weak());
        });
    }

    if let Some(column) = sort_clicked {
        state.departments_view.toggle_sort(column);
    }

    None
}
