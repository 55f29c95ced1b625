pub mod access;
pub mod dto;
pub mod errors;
pub mod ports;
pub mod use_cases;
