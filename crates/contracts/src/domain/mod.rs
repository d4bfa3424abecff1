pub mod a001_service;
pub mod a002_branch;
pub mod a003_language;
pub mod a004_service_type;
pub mod common;
