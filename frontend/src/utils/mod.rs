pub mod messages;
pub mod table;
pub mod time;
