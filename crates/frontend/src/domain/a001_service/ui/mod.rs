pub mod create;
pub mod details;
