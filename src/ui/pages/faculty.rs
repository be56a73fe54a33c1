use eframe::egui::{self, RichText, Ui};

use crate::color::salary_color;
use crate::data::model::field;
use crate::data::query::{self, SortDirection};
use crate::route::Route;
use crate::state::AppState;
use crate::ui::widgets::{badge, format_usd_compact, initials};

// ---------------------------------------------------------------------------
// Faculty roster – search, filters, sortable card grid
// ---------------------------------------------------------------------------

const SORT_OPTIONS: [(&str, &str); 4] = [
    (field::SALARY, "Salary"),
    (field::NAME, "Name"),
    (field::COURSES, "Course Load"),
    (field::STUDENTS, "Students Taught"),
];

pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<Route> {
    let mut next_route = None;

    ui.heading("Faculty Profiles");
    ui.label(
        RichText::new(
            "Individual faculty salary data, teaching loads, and historical trends across \
             UC campuses",
        )
        .weak(),
    );
    ui.add_space(8.0);

    // ---- Search & filter controls ----
    let campuses = state.dataset.campuses.clone();
    let departments = state.dataset.department_names.clone();
    let view = &mut state.faculty_view;
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search");
        ui.add(
            egui::TextEdit::singleline(&mut view.search)
                .hint_text("Search faculty…")
                .desired_width(160.0),
        );

        ui.label("Campus");
        egui::ComboBox::from_id_salt("faculty_campus")
            .selected_text(view.campus.clone())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut view.campus, query::ALL.to_string(), "All Campuses");
                for campus in &campuses {
                    ui.selectable_value(&mut view.campus, campus.clone(), campus);
                }
            });

        ui.label("Department");
        egui::ComboBox::from_id_salt("faculty_department")
            .selected_text(view.department.clone())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(
                    &mut view.department,
                    query::ALL.to_string(),
                    "All Departments",
                );
                for department in &departments {
                    ui.selectable_value(&mut view.department, department.clone(), department);
                }
            });

        ui.label("Sort By");
        let sort_label = SORT_OPTIONS
            .iter()
            .find(|(key, _)| *key == view.sort_key)
            .map(|(_, label)| *label)
            .unwrap_or("Salary");
        egui::ComboBox::from_id_salt("faculty_sort")
            .selected_text(sort_label)
            .show_ui(ui, |ui: &mut Ui| {
                for (key, label) in SORT_OPTIONS {
                    ui.selectable_value(&mut view.sort_key, key.to_string(), label);
                }
            });

        let arrow = match view.sort_direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        if ui
            .button(arrow)
            .on_hover_text("Flip sort direction")
            .clicked()
        {
            view.sort_direction = view.sort_direction.flipped();
        }
    });

    ui.add_space(8.0);

    // ---- Query ----
    let filters = state.faculty_view.predicates();
    let rows = query::query(
        &state.dataset.faculty,
        &filters,
        &state.faculty_view.sort_key,
        state.faculty_view.sort_direction,
    );

    ui.label(
        RichText::new(format!("Showing {} faculty members", rows.len())).weak(),
    );
    ui.add_space(4.0);

    // ---- Card grid ----
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for faculty in &rows {
            ui.group(|ui: &mut Ui| {
                ui.set_width(250.0);
                ui.vertical(|ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(initials(&faculty.name))
                                .strong()
                                .monospace(),
                        );
                        ui.vertical(|ui: &mut Ui| {
                            ui.strong(&faculty.name);
                            ui.label(RichText::new(&faculty.title).weak().small());
                        });
                    });
                    ui.horizontal(|ui: &mut Ui| {
                        let weak = ui.visuals().weak_text_color();
                        badge(ui, &faculty.department, weak);
                        badge(
                            ui,
                            &faculty.campus,
                            state.campus_colors.color_for(&faculty.campus),
                        );
                    });
                    ui.add_space(4.0);
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(format_usd_compact(faculty.salary))
                                .heading()
                                .color(salary_color(faculty.salary)),
                        );
                        ui.label(RichText::new("Annual Salary").weak().small());
                    });
                    ui.horizontal(|ui: &mut Ui| {
                        ui.label(format!("{} courses", faculty.courses_count));
                        ui.label(format!("{} students", faculty.students_count));
                        ui.label(format!("{} credit hrs", faculty.credit_hours));
                    });
                    ui.add_space(4.0);
                    if ui.button("View Details").clicked() {
                        next_route = Some(Route::FacultyDetail(faculty.id.clone()));
                    }
                });
            });
        }
    });

    if rows.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong("No Faculty Found");
            ui.label(RichText::new("Try adjusting your search criteria or filters").weak());
        });
    }

    next_route
}
