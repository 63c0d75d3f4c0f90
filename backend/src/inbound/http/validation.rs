//! Shared validation helpers for inbound HTTP adapters.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::Error;
use crate::domain::catalog::SortSpec;

/// Detail code attached to query values outside the accepted set.
const INVALID_VALUE: &str = "invalid_value";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Parse a query value into one of the domain's serde enums.
///
/// Column and status names use the same spelling as the JSON payloads, so
/// `sort=playersOnline` and `status=Maintenance` are accepted.
pub(crate) fn parse_enum<T: DeserializeOwned>(
    field: FieldName,
    raw: Option<&str>,
) -> Result<Option<T>, Error> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    serde_json::from_value(Value::String(raw.to_owned()))
        .map(Some)
        .map_err(|_| {
            Error::invalid_request(format!("{} has an unsupported value", field.as_str()))
                .with_details(json!({
                    "field": field.as_str(),
                    "value": raw,
                    "code": INVALID_VALUE,
                }))
        })
}

/// Combine the `sort` and `descending` query parameters.
pub(crate) fn parse_sort<C: DeserializeOwned>(
    sort: Option<&str>,
    descending: Option<bool>,
) -> Result<Option<SortSpec<C>>, Error> {
    Ok(parse_enum(FieldName::new("sort"), sort)?.map(|column| SortSpec {
        column,
        descending: descending.unwrap_or(false),
    }))
}
