/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

/// Builds a JSON object from an ordered list of (key, value) pairs, dropping
/// the pairs that have no value.
///
/// Filtering is shallow: a retained value is inserted as-is, so `null`
/// entries inside nested objects or arrays are preserved. The service
/// tolerates those, and stripping them would change the request on the wire.
pub(crate) fn compact<'k, I>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'k str, Option<Value>)>,
{
    let mut object = Map::new();

    for (key, value) in pairs {
        if let Some(value) = value {
            object.insert(key.to_string(), value);
        }
    }

    object
}

#[cfg(test)]
mod tests {
    use super::compact;
    use serde_json::{json, Value};

    #[test]
    fn unset_pairs_are_dropped() {
        let object = compact([
            ("topic", Some(Value::from("standup"))),
            ("chatType", None),
        ]);

        assert_eq!(object.len(), 1);
        assert_eq!(object.get("topic"), Some(&Value::from("standup")));
        assert!(!object.contains_key("chatType"));
    }

    #[test]
    fn explicit_falsy_values_are_kept() {
        let object = compact([
            ("isHiddenForAllMembers", Some(Value::from(false))),
            ("chainId", Some(Value::from(0))),
            ("topic", Some(Value::from(""))),
        ]);

        assert_eq!(object.get("isHiddenForAllMembers"), Some(&Value::from(false)));
        assert_eq!(object.get("chainId"), Some(&Value::from(0)));
        assert_eq!(object.get("topic"), Some(&Value::from("")));
    }

    #[test]
    fn nested_nulls_are_left_untouched() {
        let body = json!({
            "content": "<img src=\"../hostedContents/1/$value\">",
            "contentType": null,
        });

        let object = compact([("body", Some(body))]);

        let nested = object.get("body").and_then(Value::as_object).unwrap();
        assert_eq!(nested.get("contentType"), Some(&Value::Null));
    }
}
