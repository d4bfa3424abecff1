pub mod language_code;

pub use language_code::LanguageCode;
