use crate::domain::product::ProductRecord;
use crate::error::ScrapeError;

const HEADER: [&str; 3] = ["Product Name", "Price", "Rating"];

/// Writes the header row and one row per record to `path`, creating or
/// truncating the file. Fields containing delimiters or quotes are quoted.
pub fn export_products(path: &str, products: &[ProductRecord]) -> Result<(), ScrapeError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for product in products {
        writer.serialize(product)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::export_products;
    use crate::domain::product::ProductRecord;
    use crate::services::product_extractor::extract_products;

    fn record(name: &str, price: Option<&str>, rating: Option<&str>) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price: price.map(|p| p.to_string()),
            rating: rating.map(|r| r.to_string()),
        }
    }

    #[test]
    fn export_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        let products = vec![
            record("Widget", Some("19.99"), Some("4.5")),
            record("Gadget", Some("5.00"), None),
        ];

        export_products(path.to_str().unwrap(), &products).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Product Name,Price,Rating");
        assert_eq!(lines[1], "Widget,19.99,4.5");
        assert_eq!(lines[2], "Gadget,5.00,");
    }

    #[test]
    fn export_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");

        export_products(path.to_str().unwrap(), &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();

        assert_eq!(contents, "Product Name,Price,Rating\n");
    }

    #[test]
    fn export_quotes_delimiters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        let products = vec![record("Widget, Deluxe", Some("19.99"), Some("4.5"))];

        export_products(path.to_str().unwrap(), &products).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[1], "\"Widget, Deluxe\",19.99,4.5");
    }

    #[test]
    fn export_unwritable_path() {
        let result = export_products("/no/such/dir/products.csv", &[]);

        assert!(result.is_err());
    }

    #[test]
    fn extract_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        let html = "<div class=\"product-name\">Widget</div>";

        let products = extract_products(html);
        export_products(path.to_str().unwrap(), &products).unwrap();

        let contents = fs::read_to_string(&path).unwrap();

        assert_eq!(contents, "Product Name,Price,Rating\nWidget,,\n");
    }
}
