pub mod app;
pub mod color;
pub mod data;
pub mod route;
pub mod state;
pub mod ui;
