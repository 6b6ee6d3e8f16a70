//! Data types for event search results.

use serde::{Deserialize, Serialize};

/// A single event returned by the search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier assigned by the API.
    #[serde(default)]
    pub id: String,
    /// Display name of the event.
    pub name: String,
    /// Short description, if the organizer provided one.
    #[serde(default)]
    pub description: Option<String>,
    /// Start of the event.
    #[serde(default)]
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    /// End of the event.
    #[serde(default)]
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    /// Name of the venue.
    #[serde(default)]
    pub location: Option<String>,
    /// URL of the event image.
    #[serde(default)]
    pub image: Option<String>,
    /// URL of the event detail page.
    #[serde(default)]
    pub url: Option<String>,
}

/// Paged response envelope returned by the search API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedCollection {
    /// Page size the API applied.
    #[serde(default)]
    pub items_per_page: u32,
    /// Total number of matching events across all pages.
    #[serde(default)]
    pub total_items: u32,
    /// Events on this page.
    #[serde(default)]
    pub member: Vec<Event>,
}

impl PagedCollection {
    /// Events on this page.
    pub fn items(&self) -> &[Event] {
        &self.member
    }

    /// Consumes the collection, returning its events.
    pub fn into_items(self) -> Vec<Event> {
        self.member
    }

    /// Whether this page holds no events.
    pub fn is_empty(&self) -> bool {
        self.member.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_envelope() {
        let body = serde_json::json!({
            "itemsPerPage": 10,
            "totalItems": 2,
            "member": [
                {
                    "id": "e1",
                    "name": "Jazz Night",
                    "startDate": "2026-09-01T19:00:00Z",
                    "location": "De Roma"
                },
                {
                    "name": "Open Air Cinema"
                }
            ]
        });

        let collection: PagedCollection = serde_json::from_value(body).unwrap();
        assert_eq!(collection.total_items, 2);
        assert_eq!(collection.items().len(), 2);
        assert_eq!(collection.member[0].name, "Jazz Night");
        assert!(collection.member[0].start_date.is_some());
        // Fields the API omits fall back to their defaults.
        assert_eq!(collection.member[1].id, "");
        assert!(collection.member[1].location.is_none());
    }

    #[test]
    fn empty_envelope_is_empty() {
        let collection: PagedCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.is_empty());
        assert_eq!(collection.total_items, 0);
    }
}
