//! Helpers shared by the repositories: chunking for `IN (...)` filters and
//! decimal columns stored as text.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

/// Maximum number of parameters for SQLite IN (...) queries.
///
/// SQLite limits bound parameters per statement (SQLITE_MAX_VARIABLE_NUMBER,
/// typically 999); 500 leaves room for the other filters of the query.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Splits `items` into slices small enough for one `IN (...)` clause.
pub fn chunk_for_sqlite<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    items.chunks(SQLITE_MAX_PARAMS_CHUNK)
}

/// Parses a decimal text column. Scientific notation is accepted.
pub fn parse_decimal(value: &str, column: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| StorageError::MalformedValue(format!("{} '{}': {}", column, value, e)))
}

pub fn parse_optional_decimal(
    value: Option<&str>,
    column: &str,
) -> Result<Option<Decimal>, StorageError> {
    value.map(|v| parse_decimal(v, column)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_chunk_for_sqlite() {
        let empty: Vec<i32> = vec![];
        assert_eq!(chunk_for_sqlite(&empty).count(), 0);

        let items: Vec<i32> = (0..1200).collect();
        let chunks: Vec<_> = chunk_for_sqlite(&items).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), SQLITE_MAX_PARAMS_CHUNK);
        assert_eq!(chunks[2].len(), 200);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("245.50", "adr").unwrap(), dec!(245.50));
        assert_eq!(parse_decimal("4.5e4", "fixed_costs").unwrap(), dec!(45000));
        assert!(matches!(
            parse_decimal("n/a", "adr"),
            Err(StorageError::MalformedValue(_))
        ));
        assert_eq!(parse_optional_decimal(None, "peer_adr").unwrap(), None);
    }
}
