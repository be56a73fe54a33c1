use eframe::egui::{RichText, Ui};

use crate::color::salary_color;
use crate::route::Route;
use crate::state::AppState;
use crate::ui::widgets::{format_usd, stat_card};

// ---------------------------------------------------------------------------
// Landing view – hero, system totals, mission, quick links
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<Route> {
    let mut next_route = None;

    // ---- Hero ----
    ui.add_space(12.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("Academic Year {}", state.selected_year))
                .small()
                .strong(),
        );
        ui.add_space(4.0);
        ui.heading(RichText::new("Transparency in Higher Education Spending").size(28.0));
        ui.add_space(4.0);
        ui.label(
            RichText::new(
                "Comprehensive data analysis of University of California faculty salaries, \
                 teaching loads, and educational outcomes across all UC campuses.",
            )
            .weak(),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Explore Department Data").clicked() {
                next_route = Some(Route::Departments);
            }
            if ui.button("View Faculty Profiles").clicked() {
                next_route = Some(Route::Faculty);
            }
        });
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    // ---- Key metrics ----
    let summary = state.dataset.summary();
    ui.horizontal_wrapped(|ui: &mut Ui| {
        let strong = ui.visuals().strong_text_color();
        stat_card(
            ui,
            &format!("{}", summary.total_faculty as u64),
            "Total Faculty Members",
            strong,
        );
        stat_card(
            ui,
            &format_usd(summary.average_salary),
            "Average Faculty Salary",
            salary_color(summary.average_salary),
        );
        stat_card(
            ui,
            &format!("{}", summary.total_students as u64),
            "Students Taught",
            strong,
        );
        stat_card(
            ui,
            &format!("{}", summary.total_courses as u64),
            "Courses Offered",
            strong,
        );
    });

    ui.add_space(16.0);

    // ---- Mission ----
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading("Our Mission");
            ui.label(
                RichText::new("Promoting accountability and transparency in public higher education")
                    .weak(),
            );
        });
        ui.add_space(6.0);
        ui.label(
            "This report provides comprehensive analysis of faculty compensation, teaching \
             responsibilities, and student outcomes across the University of California system. \
             Our goal is to make public education data accessible, understandable, and actionable \
             for students, parents, policymakers, and the general public.",
        );
    });

    ui.add_space(16.0);

    // ---- Quick links ----
    ui.heading("Explore the Data");
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        quick_link(
            ui,
            "Department Analysis",
            "Compare salary and teaching metrics across departments and campuses",
            "View Departments",
            Route::Departments,
            &mut next_route,
        );
        quick_link(
            ui,
            "Faculty Profiles",
            "Individual faculty salary histories and teaching loads",
            "Browse Faculty",
            Route::Faculty,
            &mut next_route,
        );
        quick_link(
            ui,
            "Data Sources",
            "Methodology, sources, and download links for all datasets",
            "View Sources",
            Route::DataSources,
            &mut next_route,
        );
    });

    next_route
}

fn quick_link(
    ui: &mut Ui,
    title: &str,
    description: &str,
    button: &str,
    route: Route,
    next_route: &mut Option<Route>,
) {
    ui.group(|ui: &mut Ui| {
        ui.set_max_width(260.0);
        ui.vertical(|ui: &mut Ui| {
            ui.strong(title);
            ui.label(RichText::new(description).weak().small());
            ui.add_space(4.0);
            if ui.button(button).clicked() {
                *next_route = Some(route);
            }
        });
    });
}
