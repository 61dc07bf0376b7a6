//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use shared::models::{DEFAULT_COLOR, DEFAULT_SIZE};
use vitrine_store::{ProductFilter, SortOrder};

/// Vitrine - local product and variant catalog.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the catalog database (overrides WORK_DIR)
    #[arg(long, global = true)]
    pub work_dir: Option<String>,

    /// Log level (overrides LOG_LEVEL; RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product with no variants
    Add {
        /// Product name
        name: String,
    },

    /// Rename a product
    Rename {
        /// Product id
        id: String,
        /// New name
        name: String,
    },

    /// Delete a product and all its variants
    Delete {
        /// Product id
        id: String,
    },

    /// Manage product variants
    #[command(subcommand)]
    Variant(VariantCommand),

    /// List products
    List(ListArgs),

    /// Append demo products fetched over HTTP
    Import,

    /// Show catalog totals
    Stats,

    /// Show size and color presets
    Presets,

    /// Delete every product
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

/// Subcommands for `vitrine variant`
#[derive(Subcommand, Debug)]
pub enum VariantCommand {
    /// Add a variant to a product
    Add {
        /// Product id
        product_id: String,
        #[arg(long, default_value = DEFAULT_SIZE)]
        size: String,
        #[arg(long, default_value = DEFAULT_COLOR)]
        color: String,
        #[arg(long)]
        price: f64,
    },

    /// Edit a variant; omitted fields keep their current value
    Update {
        /// Product id
        product_id: String,
        /// Variant id
        variant_id: String,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        price: Option<f64>,
    },

    /// Remove a variant from a product
    Remove {
        /// Product id
        product_id: String,
        /// Variant id
        variant_id: String,
    },
}

/// Arguments for `vitrine list`
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Case-insensitive match on name, size, color or price
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Name order
    #[arg(long, value_enum, default_value_t = SortArg::Unsorted)]
    pub sort: SortArg,

    /// Only products with more than one variant
    #[arg(long)]
    pub multi_variant: bool,

    /// Output layout
    #[arg(long, value_enum, default_value_t = ViewMode::Grid)]
    pub view: ViewMode,
}

impl ListArgs {
    pub fn filter(&self) -> ProductFilter {
        if self.multi_variant {
            ProductFilter::MultipleVariants
        } else {
            ProductFilter::All
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Unsorted,
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Unsorted => SortOrder::Unsorted,
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    Grid,
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_add_defaults() {
        let cli = Cli::parse_from(["vitrine", "variant", "add", "p1", "--price", "15"]);
        match cli.command {
            Commands::Variant(VariantCommand::Add {
                product_id,
                size,
                color,
                price,
            }) => {
                assert_eq!(product_id, "p1");
                assert_eq!(size, "M");
                assert_eq!(color, "Red");
                assert_eq!(price, 15.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_args() {
        let cli = Cli::parse_from([
            "vitrine",
            "--work-dir",
            "/tmp/shop",
            "list",
            "-s",
            "red",
            "--sort",
            "desc",
            "--multi-variant",
            "--view",
            "list",
        ]);
        assert_eq!(cli.work_dir.as_deref(), Some("/tmp/shop"));
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.search, "red");
        assert_eq!(SortOrder::from(args.sort), SortOrder::Descending);
        assert_eq!(args.filter(), ProductFilter::MultipleVariants);
        assert_eq!(args.view, ViewMode::List);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
