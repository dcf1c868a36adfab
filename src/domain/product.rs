use serde::Serialize;

/// One scraped product listing. Price and rating are absent when the page
/// carries fewer price/rating elements than product names.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: Option<String>,
    pub rating: Option<String>,
}
