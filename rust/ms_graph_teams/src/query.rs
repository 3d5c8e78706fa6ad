/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! OData query options.
//!
//! Graph endpoints take a standardized set of query parameters (`$top`,
//! `$filter`, ...) to page, filter and shape their responses. [`Query`]
//! collects them under friendlier names; options that were never set are
//! left out of the serialized query string entirely.

/// The OData query options accepted by collection and single-resource
/// endpoints.
///
/// The API seems to deduplicate list-valued options on the server side, so
/// we don't need to do that here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    top: Option<u32>,
    skip: Option<u32>,
    search: Option<String>,
    filter: Option<String>,
    count: Option<bool>,
    orderby: Vec<String>,
    select: Vec<String>,
    expand: Vec<String>,
}

impl Query {
    pub fn new() -> Query {
        Query::default()
    }

    /// Show only the first `n` items (`$top`).
    pub fn top(mut self, n: u32) -> Query {
        self.top = Some(n);
        self
    }

    /// Skip the first `n` items (`$skip`).
    pub fn skip(mut self, n: u32) -> Query {
        self.skip = Some(n);
        self
    }

    /// Search items by search phrases (`$search`).
    pub fn search<S: Into<String>>(mut self, phrase: S) -> Query {
        self.search = Some(phrase.into());
        self
    }

    /// Filter items by property values (`$filter`).
    pub fn filter<S: Into<String>>(mut self, expression: S) -> Query {
        self.filter = Some(expression.into());
        self
    }

    /// Include a count of the items in the response (`$count`).
    pub fn count(mut self, include: bool) -> Query {
        self.count = Some(include);
        self
    }

    /// Order items by the given property values (`$orderby`).
    pub fn orderby<I, S>(mut self, properties: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Select the properties to be returned (`$select`).
    pub fn select<I, S>(mut self, properties: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Expand the given related entities (`$expand`).
    pub fn expand<I, S>(mut self, properties: I) -> Query
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = properties.into_iter().map(Into::into).collect();
        self
    }

    /// The options as (key, value) pairs, with their OData names and unset
    /// options left out. Useful for combining with
    /// `form_urlencoded::Serializer::append_pair` and similar.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("$skip", skip.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("$search", search.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }
        if let Some(count) = self.count {
            pairs.push(("$count", count.to_string()));
        }
        if !self.orderby.is_empty() {
            pairs.push(("$orderby", self.orderby.join(",")));
        }
        if !self.select.is_empty() {
            pairs.push(("$select", self.select.join(",")));
        }
        if !self.expand.is_empty() {
            pairs.push(("$expand", self.expand.join(",")));
        }

        pairs
    }
}

/// The query options accepted by `$count` endpoints, which only support
/// `$search` and `$filter`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountQuery {
    search: Option<String>,
    filter: Option<String>,
}

impl CountQuery {
    pub fn new() -> CountQuery {
        CountQuery::default()
    }

    /// Search items by search phrases (`$search`).
    pub fn search<S: Into<String>>(mut self, phrase: S) -> CountQuery {
        self.search = Some(phrase.into());
        self
    }

    /// Filter items by property values (`$filter`).
    pub fn filter<S: Into<String>>(mut self, expression: S) -> CountQuery {
        self.filter = Some(expression.into());
        self
    }

    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = &self.search {
            pairs.push(("$search", search.clone()));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::{CountQuery, Query};

    #[test]
    fn unset_options_are_omitted() {
        assert!(Query::new().pairs().is_empty());
        assert!(CountQuery::new().pairs().is_empty());
    }

    #[test]
    fn options_use_their_odata_names() {
        let query = Query::new().top(5).skip(10).filter("topic eq 'standup'");
        assert_eq!(
            query.pairs(),
            vec![
                ("$top", "5".to_string()),
                ("$skip", "10".to_string()),
                ("$filter", "topic eq 'standup'".to_string()),
            ]
        );
    }

    #[test]
    fn list_options_are_joined_with_commas() {
        let query = Query::new().select(["id", "topic"]).orderby(["createdDateTime desc"]);
        assert_eq!(
            query.pairs(),
            vec![
                ("$orderby", "createdDateTime desc".to_string()),
                ("$select", "id,topic".to_string()),
            ]
        );
    }

    #[test]
    fn count_query_only_searches_and_filters() {
        let query = CountQuery::new().search("standup").filter("chatType eq 'group'");
        assert_eq!(
            query.pairs(),
            vec![
                ("$search", "standup".to_string()),
                ("$filter", "chatType eq 'group'".to_string()),
            ]
        );
    }
}
