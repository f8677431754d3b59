//! Crate-wide result alias

use super::errors::AerisError;

/// Shorthand for `std::result::Result<T, AerisError>`
///
/// Every fallible operation in the crate returns this alias so errors from
/// adapters, the cache, and the pipeline compose with `?`.
///
/// # Examples
///
/// ```
/// use aeris::domain::errors::AerisError;
/// use aeris::domain::result::Result;
///
/// fn lookup(city: &str) -> Result<f64> {
///     if city.is_empty() {
///         return Err(AerisError::Cache("empty city name".to_string()));
///     }
///     Ok(42.0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, AerisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_propagates_with_question_mark() {
        fn inner() -> Result<i32> {
            Err(AerisError::Cache("test error".to_string()))
        }

        fn outer() -> Result<i32> {
            let value = inner()?;
            Ok(value + 1)
        }

        assert!(matches!(outer(), Err(AerisError::Cache(_))));
    }

    #[test]
    fn test_ok_value_passes_through() {
        let result: Result<&str> = Ok("clean air");
        assert_eq!(result.unwrap(), "clean air");
    }
}
