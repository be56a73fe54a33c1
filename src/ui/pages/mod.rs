pub mod data_sources;
pub mod departments;
pub mod faculty;
pub mod faculty_detail;
pub mod home;
pub mod not_found;
