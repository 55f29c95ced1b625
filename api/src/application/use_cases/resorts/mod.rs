pub mod create_resort;
pub mod delete_resort;
pub mod get_resort;
pub mod list_resorts;
pub mod update_resort;
