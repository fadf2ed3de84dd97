mod catalog;
mod layout;

pub use catalog::Catalog;
pub use layout::AppLayout;
