/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Shared accessors for property bag contents.
//!
//! Resources deserialize into a flattened [`Map`] of raw JSON properties;
//! the typed accessors on each resource go through these helpers. A missing
//! key is [`Error::NotFound`], an explicit `null` is `Ok(None)`, and a value
//! of the wrong type is [`Error::UnexpectedResponse`].

use serde_json::{Map, Value};

use crate::error::Error;

pub(crate) fn string<'a>(
    properties: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    val.as_str()
        .map(Some)
        .ok_or_else(|| Error::UnexpectedResponse(format!("{val:?}")))
}

pub(crate) fn boolean(properties: &Map<String, Value>, key: &str) -> Result<Option<bool>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    val.as_bool()
        .map(Some)
        .ok_or_else(|| Error::UnexpectedResponse(format!("{val:?}")))
}

pub(crate) fn integer(properties: &Map<String, Value>, key: &str) -> Result<Option<i64>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    val.as_i64()
        .map(Some)
        .ok_or_else(|| Error::UnexpectedResponse(format!("{val:?}")))
}

/// The raw JSON value of a structured property, for shapes that don't get a
/// typed view of their own.
pub(crate) fn raw<'a>(
    properties: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Value>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    Ok(Some(val))
}

/// The object value of a navigation property, for wrapping into a typed
/// resource view.
pub(crate) fn object<'a>(
    properties: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    val.as_object()
        .map(Some)
        .ok_or_else(|| Error::UnexpectedResponse(format!("{val:?}")))
}

pub(crate) fn strings<'a>(
    properties: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<&'a str>>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    val.as_array()
        .ok_or_else(|| Error::UnexpectedResponse(format!("{val:?}")))?
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .ok_or_else(|| Error::UnexpectedResponse(format!("{entry:?}")))
        })
        .collect::<Result<_, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties() -> Map<String, Value> {
        json!({
            "topic": "standup",
            "tenantId": null,
            "isHiddenForAllMembers": false,
            "attemptsCount": 3,
            "roles": ["owner", "guest"],
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn missing_key_is_not_found() {
        assert!(matches!(
            string(&properties(), "webUrl"),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn null_value_is_none() {
        assert_eq!(string(&properties(), "tenantId").unwrap(), None);
    }

    #[test]
    fn wrong_type_is_unexpected_response() {
        let properties = properties();
        assert!(matches!(
            string(&properties, "attemptsCount"),
            Err(Error::UnexpectedResponse(_))
        ));
        assert!(matches!(
            integer(&properties, "topic"),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn typed_values_come_through() {
        let properties = properties();
        assert_eq!(string(&properties, "topic").unwrap(), Some("standup"));
        assert_eq!(
            boolean(&properties, "isHiddenForAllMembers").unwrap(),
            Some(false)
        );
        assert_eq!(integer(&properties, "attemptsCount").unwrap(), Some(3));
        assert_eq!(
            strings(&properties, "roles").unwrap(),
            Some(vec!["owner", "guest"])
        );
    }
}
