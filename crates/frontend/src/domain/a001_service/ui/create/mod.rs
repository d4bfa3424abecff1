pub mod detail_card;
pub mod model;
pub mod view;
pub mod view_model;

pub use view::ServiceCreatePage;
