/// UI layer: navigation bar, routed pages, shared widgets, and the salary
/// history chart. Presentational only; all querying goes through
/// [`crate::data::query`].

pub mod nav;
pub mod pages;
pub mod plot;
pub mod widgets;
