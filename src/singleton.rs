// Shared currency format, initialized exactly once.

use std::sync::OnceLock;

/// How monetary amounts are rendered throughout the crate.
#[derive(Debug, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: &'static str,
    precision: usize,
}

/// Process-scoped default, created once at startup with no re-initialization
/// path. [`CurrencyFormat::global`] initializes from it.
pub const DEFAULT_CURRENCY: CurrencyFormat = CurrencyFormat {
    symbol: "$",
    precision: 2,
};

impl CurrencyFormat {
    /// Shared instance. Exactly one is ever constructed regardless of how
    /// many threads race on the first access; reads after initialization
    /// take no lock.
    pub fn global() -> &'static CurrencyFormat {
        static FORMAT: OnceLock<CurrencyFormat> = OnceLock::new();
        FORMAT.get_or_init(|| DEFAULT_CURRENCY)
    }

    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.*}", self.symbol, self.precision, amount)
    }

    pub fn symbol(&self) -> &str {
        self.symbol
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}
