pub mod aggregate;

pub use aggregate::Language;
