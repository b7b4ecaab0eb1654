use serde::Deserialize;
use utoipa::IntoParams;

/// Offset pagination query. Both values must be present for paging to apply.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Number of rows to skip (>= 0)
    pub from: Option<i64>,
    /// Maximum number of rows to return (> 0)
    pub size: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListParam {
    /// ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED (default ALL)
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParam {
    /// Text to look for in item names and descriptions
    pub text: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApprovalParam {
    /// `true` approves the booking, `false` rejects it
    pub approved: bool,
}
