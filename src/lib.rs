pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::toml_config::DrillConfig;
pub use crate::core::{
    measure::process_value, products::get_most_expensive_product, ratings::filter_by_rating,
    sequences::concatenate_arrays, text::format_string,
};
pub use domain::model::{Car, CaseMode, Product, RatedItem, Value, Vehicle};
pub use utils::error::{DrillError, Result};
