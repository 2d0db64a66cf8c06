use std::{fmt::Display, fs, io, path::Path, time::Duration};

use crate::{CatalogueEntry, PriceMap, Sale, SaleError, Usd};

/// Holds the running total cost of a batch of sales.
///
/// To create a new `Report`, use [`Report::new`] with a [`PriceMap`], then
/// feed it sales with [`Report::record`]. Or use [`aggregate`] to do the
/// whole batch at once.
///
/// A bad sale never stops the batch: it is added to [`Report::errors`] and
/// contributes nothing to [`Report::total`].
#[derive(Debug, Default)]
pub struct Report {
    prices: PriceMap,
    total: Usd,
    matched: usize,
    errors: Vec<SaleError>,
}

impl Report {
    /// Creates an empty report that prices sales using `prices`.
    #[must_use]
    pub fn new(prices: PriceMap) -> Report {
        Report {
            prices,
            ..Self::default()
        }
    }

    /// Prices `sale` and adds it to the total, or records why it couldn't.
    pub fn record(&mut self, sale: &Sale) {
        let Some(price) = sale.product.as_deref().and_then(|p| self.prices.price(p)) else {
            self.errors.push(SaleError::ProductNotFound(sale.product.clone()));
            return;
        };
        let Some(qty) = sale.quantity() else {
            self.errors.push(SaleError::InvalidSaleData(sale.clone()));
            return;
        };
        self.total += Usd::new(price) * qty;
        self.matched += 1;
    }

    #[must_use]
    pub fn total(&self) -> Usd {
        self.total
    }

    /// The problems found so far, in the order their sales were recorded.
    #[must_use]
    pub fn errors(&self) -> &[SaleError] {
        &self.errors
    }

    /// Returns the number of sales that were priced and added to the total.
    #[must_use]
    pub fn matched(&self) -> usize {
        self.matched
    }
}

/// Prices every sale in `sales` against `catalogue`, in order.
///
/// # Examples
///
/// ```
/// # use sales_cost::{aggregate, CatalogueEntry, Sale};
/// let catalogue: Vec<CatalogueEntry> =
///     serde_json::from_str(r#"[{"title": "Mouse", "price": 10.5}]"#).unwrap();
/// let sales: Vec<Sale> =
///     serde_json::from_str(r#"[{"Product": "Mouse", "Quantity": 3}]"#).unwrap();
/// let report = aggregate(&catalogue, &sales);
/// assert_eq!(report.total().to_string(), "$31.50");
/// assert!(report.errors().is_empty());
/// ```
#[must_use]
pub fn aggregate(catalogue: &[CatalogueEntry], sales: &[Sale]) -> Report {
    let mut report = Report::new(PriceMap::from_entries(catalogue));
    for sale in sales {
        report.record(sale);
    }
    tracing::info!(
        sales = sales.len(),
        matched = report.matched,
        errors = report.errors.len(),
        "aggregated sales"
    );
    report
}

const RULE: &str = "==========================================";

/// The results block shown on the console and saved to the results file.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub total: Usd,
    pub elapsed: Duration,
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "{:^width$}", "SALES TOTALS RESULTS", width = RULE.len())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total Sales Cost: {}", self.total)?;
        writeln!(
            f,
            "Elapsed Time:     {:.4} seconds",
            self.elapsed.as_secs_f64()
        )?;
        writeln!(f, "{RULE}")?;
        Ok(())
    }
}

/// Writes `results` to `path`, replacing anything already there.
///
/// # Errors
///
/// Returns any error from creating or writing the file.
pub fn write_results(path: impl AsRef<Path>, results: &str) -> io::Result<()> {
    fs::write(path, results)
}
