pub mod analytics;
pub mod content;
pub mod header;
pub mod order_info;
pub mod page;
pub mod skeleton;

pub use page::OrderPlacedPage;
