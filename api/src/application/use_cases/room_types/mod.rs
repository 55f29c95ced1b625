pub mod create_room_type;
pub mod delete_room_type;
pub mod get_room_type;
pub mod list_room_types;
pub mod update_room_type;
