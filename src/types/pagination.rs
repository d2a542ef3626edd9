//! Limit/offset query parameters for list endpoints.

use utoipa::IntoParams;

use crate::config::{DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};

/// Raw `?limit=&offset=` values.
///
/// Kept as strings so that an unparsable value falls back to its default
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of users to return (default 10)
    #[param(value_type = Option<u64>, example = 10)]
    pub limit: Option<String>,
    /// Number of users to skip (default 0)
    #[param(value_type = Option<u64>, example = 0)]
    pub offset: Option<String>,
}

/// Accepts `0..=i64::MAX`; anything else, including values that only fit
/// a `u64`, is treated as unparsable.
fn parse_or(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(default)
}

impl ListParams {
    pub fn limit(&self) -> u64 {
        parse_or(self.limit.as_deref(), DEFAULT_LIST_LIMIT)
    }

    pub fn offset(&self) -> u64 {
        parse_or(self.offset.as_deref(), DEFAULT_LIST_OFFSET)
    }
}

/// Build from decoded query pairs. The first occurrence of a key wins and
/// unknown keys are ignored.
impl FromIterator<(String, String)> for ListParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "limit" if params.limit.is_none() => params.limit = Some(value),
                "offset" if params.offset.is_none() => params.offset = Some(value),
                _ => {}
            }
        }
        params
    }
}
