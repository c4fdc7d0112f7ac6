use core::str::FromStr;

use serde::Deserialize;

use backline_core::{DomainError, DomainResult};

use crate::app::errors;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Query shape shared by every association endpoint:
/// `?relatedIds=<comma-separated uuids>&remove=<bool>`.
#[derive(Debug, Deserialize)]
pub struct AssocQuery {
    #[serde(rename = "relatedIds")]
    pub related_ids: String,
    #[serde(default)]
    pub remove: bool,
}

impl AssocQuery {
    /// Parse the comma-separated id list into typed ids. The first malformed
    /// entry rejects the whole request.
    pub fn ids<I>(&self) -> DomainResult<Vec<I>>
    where
        I: FromStr<Err = DomainError>,
    {
        self.related_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(I::from_str)
            .collect()
    }
}

/// Parse a path segment into a typed id, mapping failure straight to the
/// error response.
pub fn parse_id<I>(raw: &str) -> Result<I, axum::response::Response>
where
    I: FromStr<Err = DomainError>,
{
    raw.parse::<I>().map_err(errors::domain_error_to_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use backline_crew::RoleId;

    #[test]
    fn assoc_query_parses_a_csv_of_ids() {
        let a = RoleId::new();
        let b = RoleId::new();
        let q = AssocQuery {
            related_ids: format!("{a}, {b},"),
            remove: false,
        };

        assert_eq!(q.ids::<RoleId>().unwrap(), vec![a, b]);
    }

    #[test]
    fn assoc_query_rejects_a_malformed_id() {
        let q = AssocQuery {
            related_ids: "not-a-uuid".to_string(),
            remove: true,
        };

        assert!(matches!(
            q.ids::<RoleId>().unwrap_err(),
            DomainError::InvalidId(_)
        ));
    }
}
