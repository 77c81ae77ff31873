use embodied_core_api::{ApiError, ApiResult};
use heapless::String as HeaplessString;
use std::str::FromStr;

/// Converts a required text field into a bounded `HeaplessString`.
pub fn get_heapless_string<const N: usize>(field: &str, value: &str) -> ApiResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        ApiError::ValidationError(format!("Value for field '{field}' is too long (max {N} chars)"))
    })
}

/// Converts an optional text field into a bounded `HeaplessString`.
pub fn get_optional_heapless_string<const N: usize>(
    field: &str,
    value: Option<&str>,
) -> ApiResult<Option<HeaplessString<N>>> {
    value.map(|val| get_heapless_string(field, val)).transpose()
}

/// Rejects NaN and infinite values.
pub fn require_finite(field: &str, value: f64) -> ApiResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::ValidationError(format!("Value for field '{field}' must be a finite number")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heapless_string_bounds() {
        let short: HeaplessString<5> = get_heapless_string("name", "Brick").unwrap();
        assert_eq!(short.as_str(), "Brick");
        let long: ApiResult<HeaplessString<3>> = get_heapless_string("name", "Brick");
        assert!(matches!(long, Err(ApiError::ValidationError(_))));
        let none: Option<HeaplessString<3>> = get_optional_heapless_string("doi", None).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("energy", 2.5).unwrap(), 2.5);
        assert!(require_finite("energy", f64::NAN).is_err());
        assert!(require_finite("energy", f64::INFINITY).is_err());
    }
}
