pub mod header;
pub mod search_container;

pub use header::Header;
pub use search_container::SearchContainer;
