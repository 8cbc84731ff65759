pub mod blog;
pub mod property;
