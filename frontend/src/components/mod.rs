pub mod confirm_dialog;
pub mod create_database;
pub mod create_page;
pub mod database_view;
pub mod entry_form;
pub mod header;
pub mod home;
