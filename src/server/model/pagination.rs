use crate::server::error::AppError;

/// Offset-based page: skip `from` rows, then return at most `size` rows.
///
/// `from` is a raw row count, not a page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub from: u64,
    pub size: u64,
}

impl Pagination {
    /// Validates the `from`/`size` query values.
    ///
    /// # Returns
    /// - `Ok(Some(Pagination))` - Both values present and valid
    /// - `Ok(None)` - Either value absent; the caller returns the unpaged result
    /// - `Err(AppError::BadRequest)` - `from` is negative or `size` is not positive
    pub fn from_query(from: Option<i64>, size: Option<i64>) -> Result<Option<Self>, AppError> {
        if let Some(from) = from.filter(|from| *from < 0) {
            return Err(AppError::BadRequest(format!(
                "from must not be negative, got {}",
                from
            )));
        }
        if let Some(size) = size.filter(|size| *size <= 0) {
            return Err(AppError::BadRequest(format!(
                "size must be positive, got {}",
                size
            )));
        }

        Ok(match (from, size) {
            (Some(from), Some(size)) => Some(Self {
                from: from as u64,
                size: size as u64,
            }),
            _ => None,
        })
    }
}
