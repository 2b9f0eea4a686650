pub mod create;
pub mod delete;
pub mod dto;
pub mod read;
pub mod update;
