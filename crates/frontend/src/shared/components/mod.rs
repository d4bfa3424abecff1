pub mod notices;
pub mod page_header;
pub mod ui;

pub use notices::FormNotices;
pub use page_header::PageHeader;
