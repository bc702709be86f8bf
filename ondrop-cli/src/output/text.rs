//! Text output formatting with colors.

use ondrop_core::ProductInfo;
use ondrop_retailers::RetailerDescriptor;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the result of a stock check.
    ///
    /// ```text
    /// The North Face: Test Product
    /// SKU 0A8F5C  Color CQO  Size M
    /// Status:  ✓ In stock
    /// Sizes:   L, M
    /// Stock:
    ///   CQO_L    3  IN_STOCK
    ///   CQO_M    5  IN_STOCK
    /// ```
    pub fn format_product(&self, product: &ProductInfo, store: &str) -> String {
        let mut lines = Vec::new();

        let header = match product.product_name() {
            Some(name) => format!("{}: {}", self.bold(store), name),
            None => self.bold(store),
        };
        lines.push(header);
        lines.push(format!(
            "SKU {}  Color {}  Size {}",
            self.cyan(&product.sku),
            self.cyan(&product.color),
            self.cyan(&product.size)
        ));

        let status = if product.in_stock {
            self.green("✓ In stock")
        } else {
            self.red("✗ Out of stock")
        };
        lines.push(format!("Status:  {status}"));

        let Some(info) = &product.additional_info else {
            lines.push(self.dim("No additional details available"));
            return lines.join("\n");
        };

        if info.available_sizes.is_empty() {
            lines.push(format!("Sizes:   {}", self.dim("none in stock")));
        } else {
            lines.push(format!("Sizes:   {}", info.available_sizes.join(", ")));
        }

        if !info.stock_status.is_empty() {
            lines.push("Stock:".to_string());
            for (variant, stock) in &info.stock_status {
                lines.push(format!("  {:<8} {:>3}  {}", variant, stock.quantity, stock.status));
            }
        }

        lines.join("\n")
    }

    /// Formats the stores table header.
    pub fn format_stores_header(&self) -> String {
        self.bold(&format!(
            "{:<16} {:<6} {:<28} {}",
            "Store", "CLI", "Aliases", "Enabled"
        ))
    }

    /// Formats one stores table row.
    pub fn format_store_line(&self, desc: &RetailerDescriptor, enabled: bool) -> String {
        let enabled = if enabled {
            self.green("✓")
        } else {
            self.dim("✗")
        };

        format!(
            "{:<16} {:<6} {:<28} {}",
            desc.display_name(),
            desc.cli_name(),
            desc.cli.aliases.join(", "),
            enabled
        )
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

// ============================================================================
// Tests
// ============================================================================
