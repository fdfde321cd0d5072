pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

#[allow(unused_imports)]
pub use panel::AttendancePage;
