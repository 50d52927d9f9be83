use crate::utils::error::{DrillError, Result};
use crate::utils::validation;
use serde::de::DeserializeOwned;
use std::path::Path;

const SUPPORTED_EXTENSIONS: &[&str] = &["json", "csv"];

/// Parses a JSON array of records. A lone object is treated as a one-record array.
pub fn records_from_json<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>> {
    let json_data: serde_json::Value = serde_json::from_slice(data)?;

    let records = match json_data {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<T>, _>>()?,
        obj @ serde_json::Value::Object(_) => vec![serde_json::from_value(obj)?],
        _ => {
            return Err(DrillError::TypeMismatch {
                expected: "array or object",
                found: "scalar",
            })
        }
    };

    tracing::debug!("Parsed {} records from JSON", records.len());
    Ok(records)
}

/// Parses CSV with a header row naming the record fields.
pub fn records_from_csv<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    tracing::debug!("Parsed {} records from CSV", records.len());
    Ok(records)
}

/// Loads records from a `.json` or `.csv` file, chosen by extension.
pub fn load_records<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let path_str = path.to_string_lossy();
    validation::validate_path("fixture", &path_str)?;
    let extension =
        validation::validate_file_extension("fixture", &path_str, SUPPORTED_EXTENSIONS)?;

    let data = std::fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path_str);

    match extension.as_str() {
        "json" => records_from_json(&data),
        _ => records_from_csv(&data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Product, RatedItem};

    #[test]
    fn test_json_array_and_single_object() {
        let books: Vec<RatedItem> =
            records_from_json(br#"[{"title": "A", "rating": 4.5}, {"title": "B", "rating": 3}]"#)
                .unwrap();
        assert_eq!(books, vec![RatedItem::new("A", 4.5), RatedItem::new("B", 3.0)]);

        let one: Vec<Product> = records_from_json(br#"{"name": "Pen", "price": 1.25}"#).unwrap();
        assert_eq!(one, vec![Product::new("Pen", 1.25)]);
    }

    #[test]
    fn test_json_rejects_scalars_and_bad_records() {
        let err = records_from_json::<Product>(b"42").unwrap_err();
        assert!(matches!(err, DrillError::TypeMismatch { .. }));

        let err = records_from_json::<Product>(br#"[{"name": "Pen"}]"#).unwrap_err();
        assert!(matches!(err, DrillError::SerializationError(_)));
    }

    #[test]
    fn test_csv_records() {
        let csv_data = b"name, price\nLaptop, 999.99\nMouse, 19.5\n";
        let products: Vec<Product> = records_from_csv(csv_data).unwrap();
        assert_eq!(
            products,
            vec![Product::new("Laptop", 999.99), Product::new("Mouse", 19.5)]
        );

        let err = records_from_csv::<Product>(b"name,price\nLaptop,cheap\n").unwrap_err();
        assert!(matches!(err, DrillError::CsvError(_)));
    }

    #[test]
    fn test_load_rejects_unsupported_extension() {
        let err = load_records::<Product, _>("products.xml").unwrap_err();
        assert!(matches!(err, DrillError::InvalidConfigValueError { .. }));
    }
}
