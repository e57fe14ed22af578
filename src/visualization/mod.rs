pub mod text_plots;
pub mod export;

pub use text_plots::{plot_series, plot_pair, catalog_summary};
pub use export::{export_series_csv, export_series_json, export_catalog_json};
