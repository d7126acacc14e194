use serde::{Deserialize, Serialize};

/// One registry assignment row as returned by the lookup backend.
///
/// Wire field names follow the IEEE CSV headers the backend serves its
/// results with.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchRecord {
    #[serde(rename = "Registry")]
    pub registry: String,
    /// Partial hex identifier block issued to the organization.
    #[serde(rename = "Assignment")]
    pub assignment: String,
    #[serde(rename = "Organization Name")]
    pub organization_name: String,
    #[serde(rename = "Organization Address")]
    pub organization_address: String,
}

/// One page of search results from the lookup backend.
///
/// The backend omits `total` when there are no matches at all and omits
/// `data` when the requested page is past the last match, so every field
/// except `count` must tolerate being absent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResponse {
    /// Number of records on this page.
    #[serde(default)]
    pub count: usize,
    /// Total matches across all pages.
    #[serde(default)]
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<MatchRecord>>,
    /// Backend-supplied explanation for an empty result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl SearchResponse {
    /// Records on this page, empty when the backend sent none.
    pub fn records(&self) -> &[MatchRecord] {
        self.data.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_page() {
        let body = serde_json::json!({
            "count": 1,
            "total": 3,
            "data": [{
                "Registry": "MA-L",
                "Assignment": "286FB9",
                "Organization Name": "Nokia Shanghai Bell Co., Ltd.",
                "Organization Address": "Ningqiao Road Pudong Jinqiao Shanghai CN 201206",
            }],
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.count, 1);
        assert_eq!(response.total, 3);
        assert_eq!(response.records().len(), 1);
        assert_eq!(response.records()[0].assignment, "286FB9");
        assert!(response.info.is_none());
    }

    #[test]
    fn test_deserializes_empty_result_without_total() {
        let body = serde_json::json!({
            "count": 0,
            "info": "No OUI information found for the given MAC address.",
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.count, 0);
        assert_eq!(response.total, 0);
        assert!(response.records().is_empty());
        assert!(response.info.is_some());
    }
}
