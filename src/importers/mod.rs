// Importers module - price series file loaders

pub mod price_csv;

pub use price_csv::parse_price_csv;
