//! Test builders: ergonomic constructors for `Record`s and indexes.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use vitrine_core::{Record, SearchIndex};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("CE-001", "Signed Jersey")
///     .esport("cs")
///     .team("Fnatic")
///     .image("/img/ce-001.jpg")
///     .build();
/// ```
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            record: Record {
                url: format!("/record/{}/", id.to_lowercase()),
                id,
                title: title.into(),
                description: None,
                steward: None,
                team: None,
                player: None,
                esport: "dota".to_string(),
                primary_image: None,
            },
        }
    }

    pub fn esport(mut self, esport: impl Into<String>) -> Self {
        self.record.esport = esport.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    pub fn steward(mut self, steward: impl Into<String>) -> Self {
        self.record.steward = Some(steward.into());
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.record.team = Some(team.into());
        self
    }

    pub fn player(mut self, player: impl Into<String>) -> Self {
        self.record.player = Some(player.into());
        self
    }

    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.record.primary_image = Some(src.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// `n` records titled `"{stem} {i}"`, ids `R000`, `R001`, ...
pub fn numbered_records(n: usize, stem: &str) -> Vec<Record> {
    (0..n)
        .map(|i| RecordBuilder::new(format!("R{i:03}"), format!("{stem} {i}")).build())
        .collect()
}

/// An already-published index.
pub fn loaded_index(records: Vec<Record>) -> SearchIndex {
    SearchIndex::with_records(records)
}
