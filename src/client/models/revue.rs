//! Revue resource models

use serde::{Deserialize, Serialize};

/// Request body for create and edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevueDraft {
    /// Revue title (required by the service)
    #[serde(rename = "Title")]
    pub title: String,

    /// Revue description (required by the service)
    #[serde(rename = "Description")]
    pub description: String,

    /// Optional link; omitted from the body when unset
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RevueDraft {
    /// Draft with an explicit (possibly empty) url
    pub fn new(title: &str, description: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            url: Some(url.to_string()),
        }
    }
}

/// Revue record as returned by `/Revue/All`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevueRecord {
    /// Server-assigned identifier
    #[serde(alias = "Id", default)]
    pub id: Option<String>,

    /// Same identifier under the envelope's key; some payloads carry both
    #[serde(rename = "revueId", alias = "RevueId", default)]
    pub revue_id: Option<String>,

    #[serde(alias = "Title", default)]
    pub title: Option<String>,

    #[serde(alias = "Description", default)]
    pub description: Option<String>,

    #[serde(alias = "Url", default)]
    pub url: Option<String>,
}

impl RevueRecord {
    /// The record's identifier, preferring `revueId` over `id`
    pub fn identifier(&self) -> Option<&str> {
        self.revue_id.as_deref().or(self.id.as_deref())
    }
}

/// Message envelope returned by create, edit and delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Human readable outcome, e.g. "Successfully created!"
    #[serde(rename = "msg", alias = "Msg", default)]
    pub msg: Option<String>,

    /// Identifier of the created revue (create only)
    #[serde(rename = "revueId", alias = "RevueId", default)]
    pub revue_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_pascal_case() {
        let draft = RevueDraft::new("New Revue", "Some Description", "");
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(
            json,
            r#"{"Title":"New Revue","Description":"Some Description","Url":""}"#
        );
    }

    #[test]
    fn test_draft_without_url_omits_field() {
        let draft = RevueDraft::default();
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"Title":"","Description":""}"#);
    }

    #[test]
    fn test_record_accepts_revue_id_alias() {
        let record: RevueRecord =
            serde_json::from_str(r#"{"revueId":"r-1","title":"T","description":"D","url":""}"#)
                .unwrap();
        assert_eq!(record.identifier(), Some("r-1"));
        assert_eq!(record.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_record_with_both_id_keys() {
        let record: RevueRecord =
            serde_json::from_str(r#"{"id":"a","revueId":"a","title":"T"}"#).unwrap();
        assert_eq!(record.identifier(), Some("a"));
    }

    #[test]
    fn test_record_identifier_falls_back_to_id() {
        let record: RevueRecord = serde_json::from_str(r#"{"id":"only-id"}"#).unwrap();
        assert!(record.revue_id.is_none());
        assert_eq!(record.identifier(), Some("only-id"));
    }

    #[test]
    fn test_envelope_accepts_pascal_case() {
        let env: ApiEnvelope =
            serde_json::from_str(r#"{"Msg":"Successfully created!","RevueId":"42"}"#).unwrap();
        assert_eq!(env.msg.as_deref(), Some("Successfully created!"));
        assert_eq!(env.revue_id.as_deref(), Some("42"));
    }
}
