pub mod measure;
pub mod products;
pub mod ratings;
pub mod sequences;
pub mod text;

pub use crate::domain::model::{Car, CaseMode, Product, RatedItem, Value, Vehicle};
