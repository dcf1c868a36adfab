pub mod csv_export;
pub mod page_fetcher;
pub mod product_extractor;

pub use csv_export::*;
pub use page_fetcher::*;
pub use product_extractor::*;
