use scraper::{Html, Selector};

use crate::domain::product::ProductRecord;

const NAME_SELECTOR: &str = "div.product-name";
const PRICE_SELECTOR: &str = "span.product-price";
const RATING_SELECTOR: &str = "div.product-rating";

/// Extracts product records from a page. Parsing is error-recovering, so
/// malformed markup degrades to a best-effort tree rather than a failure.
/// Records follow the name matches in document order; the i-th price and
/// rating on the page attach to the i-th record.
pub fn extract_products(html: &str) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);

    let names = select_text(&document, NAME_SELECTOR);
    let prices = select_text(&document, PRICE_SELECTOR);
    let ratings = select_text(&document, RATING_SELECTOR);

    log::info!(
        "Matched {} names, {} prices, {} ratings",
        names.len(),
        prices.len(),
        ratings.len()
    );

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| ProductRecord {
            name,
            price: prices.get(i).cloned(),
            rating: ratings.get(i).cloned(),
        })
        .collect()
}

/// Text content of every element matching `css`, markup stripped. A
/// selector that fails to compile contributes no values for its field.
fn select_text(document: &Html, css: &str) -> Vec<String> {
    let selector = match Selector::parse(css) {
        Ok(selector) => selector,
        Err(e) => {
            log::error!("Failed to compile selector {}: {}", css, e);
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .collect()
}
