//! Core types for vitrine-core.
//!
//! A [`Record`] is one catalog entry (team, player, or item) as it appears in
//! the site's `search-index.json`. The site generator has emitted two key
//! spellings over time (`title`/`esport`/`team` and `name`/`game`/
//! `organization`); both deserialize into the same fields.

use serde::{Deserialize, Serialize};

/// One catalog entry from the search index.
///
/// Every optional field is an explicit `Option`. A JSON `null` and a missing
/// key both deserialize to `None`. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique catalog identifier, e.g. `CE-001`.
    pub id: String,
    /// Human-readable name.
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Username of the collector holding the item.
    #[serde(default)]
    pub steward: Option<String>,
    #[serde(default, alias = "organization")]
    pub team: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    /// Short category code (`cod`, `halo`, `dota`, …).
    #[serde(alias = "game")]
    pub esport: String,
    /// Link to the record's detail page.
    pub url: String,
    #[serde(default)]
    pub primary_image: Option<String>,
}

impl Record {
    /// The textual fields a query is matched against, in match order.
    ///
    /// Absent optional fields are skipped rather than treated as empty text.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.title.as_str()),
            self.description.as_deref(),
            self.steward.as_deref(),
            self.team.as_deref(),
            self.player.as_deref(),
            Some(self.id.as_str()),
            Some(self.esport.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let rec: Record = serde_json::from_str(
            r#"{"id":"R1","title":"Blue Team Jersey","esport":"dota","url":"/record/R1/"}"#,
        )
        .unwrap();
        assert_eq!(rec.id, "R1");
        assert_eq!(rec.description, None);
        assert_eq!(rec.primary_image, None);
    }

    #[test]
    fn null_optional_fields_are_none() {
        let rec: Record = serde_json::from_str(
            r#"{"id":"R1","title":"t","esport":"cs","url":"/r/","steward":null,"primary_image":null}"#,
        )
        .unwrap();
        assert_eq!(rec.steward, None);
        assert_eq!(rec.primary_image, None);
    }

    #[test]
    fn generator_key_spellings_are_accepted() {
        let rec: Record = serde_json::from_str(
            r#"{"id":"CE-001","name":"OpTic Jersey","game":"Call of Duty",
                "organization":"OpTic Gaming","item_type":"jersey","year":2013,
                "url":"/record/CE-001/"}"#,
        )
        .unwrap();
        assert_eq!(rec.title, "OpTic Jersey");
        assert_eq!(rec.esport, "Call of Duty");
        assert_eq!(rec.team.as_deref(), Some("OpTic Gaming"));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let res: Result<Record, _> =
            serde_json::from_str(r#"{"id":"R1","title":"t","url":"/r/"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn searchable_fields_skip_absent_values() {
        let rec = Record {
            id: "R1".into(),
            title: "Title".into(),
            description: None,
            steward: Some("alice".into()),
            team: None,
            player: None,
            esport: "halo".into(),
            url: "/r/".into(),
            primary_image: None,
        };
        let fields: Vec<&str> = rec.searchable_fields().collect();
        assert_eq!(fields, vec!["Title", "alice", "R1", "halo"]);
    }
}
