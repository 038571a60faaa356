//! Bounds for caller-supplied paging parameters.

/// Resolve an optional limit against a default, keeping it within `1..=max`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Resolve an optional offset, flooring negatives at zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
