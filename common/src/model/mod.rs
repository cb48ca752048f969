pub mod database;
pub mod page;
pub mod property;
pub mod rich_text;
pub mod user;
pub mod value;
pub mod values;
pub mod write;
