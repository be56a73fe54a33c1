use eframe::egui;

use faculty_scope::app::FacultyScopeApp;
use faculty_scope::route::Route;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional deep link: `faculty-scope /faculty/3` opens on that view.
    let initial_route = std::env::args()
        .nth(1)
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Faculty Scope – UC Salary & Teaching Data",
        options,
        Box::new(move |_cc| Ok(Box::new(FacultyScopeApp::new(initial_route)))),
    )
}
