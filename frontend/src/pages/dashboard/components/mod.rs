pub mod departments;
pub mod recent;
pub mod summary;

pub use departments::DepartmentBreakdown;
pub use recent::RecentAttendanceTable;
pub use summary::SummarySection;
