//! Search index fixtures and built-site directories.

use std::path::Path;
use vitrine_core::Record;

/// The single-record index used throughout the examples in the docs.
pub const JERSEY_INDEX: &str =
    r#"[{"id":"R1","title":"Blue Team Jersey","esport":"dota","url":"/record/R1/"}]"#;

/// A small catalog mixing both key spellings the site generator emits.
pub const SAMPLE_INDEX: &str = r#"[
  {"id":"CE-001","title":"Signed Fnatic Jersey","description":"Worn at the 2015 Major","team":"Fnatic","player":"olofmeister","esport":"cs","url":"/record/ce-001/","primary_image":"/static/img/ce-001.jpg"},
  {"id":"CE-002","name":"Halo 2 LAN Controller","game":"halo","url":"/record/ce-002/","steward":"kettle"},
  {"id":"CE-003","title":"The International Aegis replica","esport":"dota","organization":"OG","url":"/record/ce-003/","primary_image":null},
  {"id":"T-001","name":"Team Liquid","game":"sc2","url":"/team/t-001/"},
  {"id":"P-001","title":"Faker","description":"Mid laner","team":"T1","esport":"lol","url":"/player/p-001/"}
]"#;

pub fn sample_records() -> Vec<Record> {
    serde_json::from_str(SAMPLE_INDEX).expect("SAMPLE_INDEX must parse")
}

/// Write `body` as a built site's search index under `root`.
pub fn write_site(root: &Path, body: &str) {
    let dir = root.join("static");
    std::fs::create_dir_all(&dir).expect("create static dir");
    std::fs::write(dir.join("search-index.json"), body).expect("write search index");
}

/// A temporary built site whose index is `body`.
pub fn temp_site(body: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_site(dir.path(), body);
    dir
}
