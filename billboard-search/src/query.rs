//! Query model for the event search API.
//!
//! `SearchQuery` collects the parameters of a single search request and
//! serializes them to the URL parameter names the API expects.

/// Audience filter applied to a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudienceType {
    /// No audience restriction (the API's `*` wildcard).
    #[default]
    Everyone,
    /// Events restricted to members.
    Members,
    /// Events aimed at schools.
    Education,
}

impl AudienceType {
    /// Parameter value sent to the API.
    pub fn as_param(self) -> &'static str {
        match self {
            AudienceType::Everyone => "*",
            AudienceType::Members => "members",
            AudienceType::Education => "education",
        }
    }
}

/// Direction of a sort clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {s}")),
        }
    }
}

/// Sort clause: field name plus direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Field to sort on.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

/// A single search request against the event API.
///
/// Built with the builder-style `with_*` methods; `to_params` produces the
/// URL query pairs in a stable order.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    query: Option<String>,
    audience: Option<AudienceType>,
    limit: Option<usize>,
    start: Option<usize>,
    sort: Option<Sort>,
    embed: bool,
}

impl SearchQuery {
    /// Creates an empty query. `embed` requests full event bodies instead
    /// of references.
    pub fn new(embed: bool) -> Self {
        Self {
            embed,
            ..Self::default()
        }
    }

    /// Sets the free-text query expression. Empty strings are ignored.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.query = Some(query);
        }
        self
    }

    /// Sets the audience filter.
    pub fn with_audience(mut self, audience: AudienceType) -> Self {
        self.audience = Some(audience);
        self
    }

    /// Limits the number of returned items.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result offset for paging.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    /// Adds a sort clause.
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction,
        });
        self
    }

    /// The free-text query expression, if any.
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The configured result limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Serializes the query to URL parameter pairs.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(query) = &self.query {
            params.push(("q".to_string(), query.clone()));
        }
        if let Some(audience) = self.audience {
            params.push(("audienceType".to_string(), audience.as_param().to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(start) = self.start {
            params.push(("start".to_string(), start.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push((format!("sort[{}]", sort.field), sort.direction.to_string()));
        }
        if self.embed {
            params.push(("embed".to_string(), "true".to_string()));
        }

        params
    }
}
