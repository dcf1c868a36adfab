use env_logger::Env;
use scout::services::{export_products, extract_products, fetch_page};

const PRODUCT_PAGE_URL: &str = "https://www.example.com/products";
const OUTPUT_FILE: &str = "products.csv";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let html = match fetch_page(PRODUCT_PAGE_URL).await {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to fetch {}: {}", PRODUCT_PAGE_URL, e);
            std::process::exit(1);
        }
    };

    let products = extract_products(&html);
    drop(html);

    match export_products(OUTPUT_FILE, &products) {
        Ok(()) => log::info!("Wrote {} rows to {}", products.len(), OUTPUT_FILE),
        Err(e) => {
            log::error!("Failed to write {}: {}", OUTPUT_FILE, e);
            std::process::exit(2);
        }
    }
}
