/// Largest unsigned integer value exactly representable as an `f64`
/// (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use curria::util::num::{i64_to_f64_checked, MAX_SAFE_I64_INT};
///
/// // Works for safe values
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// // Fails for values outside safe range
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}
