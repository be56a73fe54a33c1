use eframe::egui;

use crate::route::Route;
use crate::state::AppState;
use crate::ui::{nav, pages};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FacultyScopeApp {
    pub state: AppState,
}

impl FacultyScopeApp {
    pub fn new(initial_route: Route) -> Self {
        Self {
            state: AppState::with_route(initial_route),
        }
    }
}

impl Default for FacultyScopeApp {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl eframe::App for FacultyScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut next_route = None;

        // ---- Top panel: navigation bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            if let Some(route) = nav::top_bar(ui, &mut self.state) {
                next_route = Some(route);
            }
        });

        // ---- Central panel: the routed page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let route = self.state.route.clone();
                    let clicked = match &route {
                        Route::Home => pages::home::show(ui, &mut self.state),
                        Route::Departments => pages::departments::show(ui, &mut self.state),
                        Route::Faculty => pages::faculty::show(ui, &mut self.state),
                        Route::FacultyDetail(id) => {
                            pages::faculty_detail::show(ui, &mut self.state, id)
                        }
                        Route::DataSources => pages::data_sources::show(ui, &mut self.state),
                        Route::NotFound(path) => pages::not_found::page_not_found(ui, path),
                    };
                    if clicked.is_some() {
                        next_route = clicked;
                    }
                });
        });

        // Apply navigation after rendering so page borrows have ended.
        if let Some(route) = next_route {
            self.state.navigate(route);
        }
    }
}
