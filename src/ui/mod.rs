pub mod messages;
pub mod records;
