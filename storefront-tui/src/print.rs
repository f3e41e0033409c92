//! Non-interactive output: fetch once, print one page, exit

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use libstorefront::service::events::EventBus;
use libstorefront::service::{CatalogSnapshot, ProductStore};
use libstorefront::source::{CatalogSource, HttpCatalogSource};
use libstorefront::{Config, StorefrontError};

/// Render a catalog page as plain text
pub fn format_page(snapshot: &CatalogSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Catalog of Items");
    let _ = writeln!(
        out,
        "Page {} of {} ({} products)",
        snapshot.current_page,
        snapshot.page_numbers.len(),
        snapshot.total_items
    );

    for product in &snapshot.current_items {
        let _ = writeln!(out, "  {:>4}  {}", product.id, product.title);
    }

    let pages: Vec<String> = snapshot.page_numbers.iter().map(|p| p.to_string()).collect();
    let _ = writeln!(out, "Pages: {}", pages.join(" "));
    out
}

/// Fetch the catalog and print `page` to stdout
///
/// Unlike the TUI, a failed fetch is reported as an error here so scripts
/// can tell an empty catalog from an unreachable one.
pub fn run(config: &Config, page: usize) -> Result<()> {
    if page == 0 {
        return Err(StorefrontError::InvalidInput("--page must be 1 or greater".to_string()).into());
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let source = HttpCatalogSource::new(&config.catalog).context("Failed to build catalog client")?;

    let products = runtime
        .block_on(source.fetch_products())
        .with_context(|| format!("Could not fetch catalog from {}", source.describe()))?;

    let catalog = ProductStore::new(EventBus::default());
    catalog.replace_products(products);
    catalog.select_page(page);
    let text = format_page(&catalog.snapshot());

    std::io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libstorefront::service::FetchStatus;
    use libstorefront::Product;

    #[test]
    fn test_format_page() {
        let snapshot = CatalogSnapshot {
            current_items: vec![Product::new(11, "Shirt"), Product::new(12, "Hat")],
            page_numbers: vec![1, 2, 3],
            current_page: 3,
            total_items: 12,
            status: FetchStatus::Loaded,
        };

        assert_eq!(
            format_page(&snapshot),
            "Catalog of Items\nPage 3 of 3 (12 products)\n    11  Shirt\n    12  Hat\nPages: 1 2 3\n"
        );
    }

    #[test]
    fn test_format_empty_catalog() {
        let text = format_page(&CatalogSnapshot::default());
        assert!(text.contains("Page 1 of 0 (0 products)"));
        assert!(text.ends_with("Pages: \n"));
    }

    #[test]
    fn test_page_zero_is_invalid_input() {
        let err = run(&Config::default(), 0).unwrap_err();
        let inner = err.downcast_ref::<StorefrontError>().unwrap();
        assert_eq!(inner.exit_code(), 3);
    }
}
