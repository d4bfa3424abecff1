pub mod credentials;
pub mod storage;

pub use credentials::Credentials;
