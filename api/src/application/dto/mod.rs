pub mod resorts;
