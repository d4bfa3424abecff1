pub mod model;
pub mod translation_card;
pub mod view;
pub mod view_model;

pub use view::ServiceEditPage;
