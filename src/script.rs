//! Edit scripts: a batch of editor operations read from TOML.
//!
//! A script is the offline stand-in for an editing session. Each `[[edits]]`
//! table is one operation, selected by its `op` key:
//!
//! ```toml
//! [[edits]]
//! op = "update_item"
//! section = "menu"
//! list = "items"
//! at = 0            # index, or an item id string
//! field = "price"
//! value = "9,500"
//!
//! [[edits]]
//! op = "add_item"   # omit `item` for the default record
//! section = "menu"
//! list = "items"
//! ```
//!
//! Steps run in order against a [`ContentStore`], so subscribers see one
//! replacement per step. The first failing step stops the script; steps
//! before it stay applied.

use crate::content::{ItemId, Section, SiteContent};
use crate::editor::{self, Direction, EditError, FieldValue};
use crate::store::ContentStore;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("step {step}: {source}")]
    Step {
        /// 1-based position in the script.
        step: usize,
        #[source]
        source: EditError,
    },
}

/// Position or identity of a list item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemTarget {
    Index(usize),
    Id(ItemId),
}

impl fmt::Display for ItemTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemTarget::Index(index) => write!(f, "[{index}]"),
            ItemTarget::Id(id) => write!(f, "#{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
pub enum EditOp {
    SetField {
        section: String,
        field: String,
        value: String,
    },
    UpdateItem {
        section: String,
        list: String,
        at: ItemTarget,
        field: String,
        value: FieldValue,
    },
    AddItem {
        section: String,
        list: String,
        #[serde(default)]
        item: Option<serde_json::Value>,
    },
    RemoveItem {
        section: String,
        list: String,
        at: ItemTarget,
    },
    MoveSection {
        index: usize,
        direction: Direction,
    },
    SetHeroImages {
        text: String,
    },
}

impl EditOp {
    /// Produce the replacement document for this step.
    pub fn apply(&self, content: &SiteContent) -> Result<SiteContent, EditError> {
        match self {
            EditOp::SetField {
                section,
                field,
                value,
            } => editor::set_field(content, section.parse()?, field, value.as_str()),
            EditOp::UpdateItem {
                section,
                list,
                at,
                field,
                value,
            } => {
                let section: Section = section.parse()?;
                match at {
                    ItemTarget::Index(index) => {
                        editor::update_item(content, section, list, *index, field, value.clone())
                    }
                    ItemTarget::Id(id) => {
                        editor::update_item_by_id(content, section, list, id, field, value.clone())
                    }
                }
            }
            EditOp::AddItem {
                section,
                list,
                item,
            } => {
                let section: Section = section.parse()?;
                match item {
                    Some(item) => editor::add_item(content, section, list, item),
                    None => editor::add_item(content, section, list, &editor::new_item(section, list)?),
                }
            }
            EditOp::RemoveItem { section, list, at } => {
                let section: Section = section.parse()?;
                match at {
                    ItemTarget::Index(index) => editor::remove_item(content, section, list, *index),
                    ItemTarget::Id(id) => editor::remove_item_by_id(content, section, list, id),
                }
            }
            EditOp::MoveSection { index, direction } => {
                editor::move_section(content, *index, *direction)
            }
            EditOp::SetHeroImages { text } => Ok(editor::set_hero_images(content, text)),
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::SetField { section, field, .. } => write!(f, "set {section}.{field}"),
            EditOp::UpdateItem {
                section,
                list,
                at,
                field,
                ..
            } => write!(f, "update {section}.{list}{at}.{field}"),
            EditOp::AddItem { section, list, item } => match item {
                Some(_) => write!(f, "add to {section}.{list}"),
                None => write!(f, "add default item to {section}.{list}"),
            },
            EditOp::RemoveItem { section, list, at } => write!(f, "remove {section}.{list}{at}"),
            EditOp::MoveSection { index, direction } => {
                write!(f, "move section {index} {direction}")
            }
            EditOp::SetHeroImages { .. } => write!(f, "replace hero images"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditScript {
    #[serde(default)]
    pub edits: Vec<EditOp>,
}

pub fn parse_script(text: &str) -> Result<EditScript, ScriptError> {
    Ok(toml::from_str(text)?)
}

pub fn load_script(path: &Path) -> Result<EditScript, ScriptError> {
    let text = fs::read_to_string(path)?;
    parse_script(&text)
}

/// Run every step against the store. Returns a description of each applied step.
pub fn apply_script(store: &mut ContentStore, script: &EditScript) -> Result<Vec<String>, ScriptError> {
    let mut applied = Vec::with_capacity(script.edits.len());
    for (i, op) in script.edits.iter().enumerate() {
        let step = i + 1;
        store
            .apply(|content| op.apply(content))
            .map_err(|source| ScriptError::Step { step, source })?;
        tracing::debug!(step, op = %op, "edit applied");
        applied.push(op.to_string());
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionKey;
    use crate::test_helpers::*;

    const FULL_SCRIPT: &str = r#"
[[edits]]
op = "set_field"
section = "franchise"
field = "contactPhone"
value = "1588-1234"

[[edits]]
op = "update_item"
section = "menu"
list = "items"
at = 0
field = "price"
value = "9,500"

[[edits]]
op = "add_item"
section = "menu"
list = "items"

[[edits]]
op = "remove_item"
section = "reviews"
list = "items"
at = "r2"

[[edits]]
op = "move_section"
index = 3
direction = "up"

[[edits]]
op = "set_hero_images"
text = "https://a.jpg\nhttps://b.jpg"
"#;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn parse_every_op() {
        let script = parse_script(FULL_SCRIPT).unwrap();
        assert_eq!(script.edits.len(), 6);
        assert!(matches!(
            &script.edits[1],
            EditOp::UpdateItem { at: ItemTarget::Index(0), value: FieldValue::Text(v), .. } if v == "9,500"
        ));
        assert!(matches!(&script.edits[2], EditOp::AddItem { item: None, .. }));
        assert!(matches!(
            &script.edits[3],
            EditOp::RemoveItem { at: ItemTarget::Id(id), .. } if id.as_str() == "r2"
        ));
        assert!(matches!(
            script.edits[4],
            EditOp::MoveSection { index: 3, direction: Direction::Up }
        ));
    }

    #[test]
    fn parse_typed_values() {
        let script = parse_script(
            r#"
[[edits]]
op = "update_item"
section = "startupCost"
list = "items"
at = 1
field = "highlight"
value = true

[[edits]]
op = "update_item"
section = "locations"
list = "list"
at = 0
field = "lat"
value = 35.5
"#,
        )
        .unwrap();
        assert!(matches!(&script.edits[0], EditOp::UpdateItem { value: FieldValue::Flag(true), .. }));
        assert!(matches!(&script.edits[1], EditOp::UpdateItem { value: FieldValue::Number(n), .. } if *n == 35.5));
    }

    #[test]
    fn parse_add_item_with_inline_record() {
        let script = parse_script(
            r#"
[[edits]]
op = "add_item"
section = "interior"
list = "items"
item = { name = "테라스", image = "https://example.com/t.jpg" }
"#,
        )
        .unwrap();
        let mut store = ContentStore::new(three_interiors());
        apply_script(&mut store, &script).unwrap();
        let items = &store.content().interior.items;
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].name, "테라스");
        assert!(!items[3].id.as_str().is_empty());
    }

    #[test]
    fn empty_script_is_valid() {
        assert!(parse_script("").unwrap().edits.is_empty());
    }

    #[test]
    fn unknown_op_is_rejected() {
        let result = parse_script("[[edits]]\nop = \"rename_section\"\n");
        assert!(matches!(result, Err(ScriptError::Toml(_))));
    }

    // =========================================================================
    // Applying
    // =========================================================================

    #[test]
    fn apply_full_script() {
        let mut store = ContentStore::new(sample_content());
        let menu_len = store.content().menu.items.len();
        let script = parse_script(FULL_SCRIPT).unwrap();

        let applied = apply_script(&mut store, &script).unwrap();
        assert_eq!(applied.len(), 6);
        assert_eq!(applied[0], "set franchise.contactPhone");
        assert_eq!(store.revision(), 6);

        let content = store.content();
        assert_eq!(content.franchise.contact_phone, "1588-1234");
        assert_eq!(content.menu.items[0].price, "9,500");
        assert_eq!(content.menu.items.len(), menu_len + 1);
        assert_eq!(content.menu.items[menu_len].name, "새 메뉴");
        assert!(content.reviews.items.iter().all(|r| r.id.as_str() != "r2"));
        assert_eq!(content.section_order[2], SectionKey::Interior);
        assert_eq!(content.hero.images, ["https://a.jpg", "https://b.jpg"]);
    }

    #[test]
    fn failing_step_reports_its_position() {
        let script = parse_script(
            r#"
[[edits]]
op = "set_field"
section = "footer"
field = "copyright"
value = "© 2026"

[[edits]]
op = "remove_item"
section = "menu"
list = "items"
at = 42

[[edits]]
op = "set_field"
section = "footer"
field = "address"
value = "never applied"
"#,
        )
        .unwrap();
        let mut store = ContentStore::new(sample_content());
        let err = apply_script(&mut store, &script).unwrap_err();
        match err {
            ScriptError::Step { step, source } => {
                assert_eq!(step, 2);
                assert!(matches!(source, EditError::IndexOutOfRange { index: 42, .. }));
            }
            other => panic!("expected Step error, got {other:?}"),
        }
        assert_eq!(store.revision(), 1);
        assert_eq!(store.content().footer.copyright, "© 2026");
        assert_ne!(store.content().footer.address, "never applied");
    }

    #[test]
    fn unknown_section_name_fails_the_step() {
        let op = EditOp::SetField {
            section: "about".to_string(),
            field: "title".to_string(),
            value: "x".to_string(),
        };
        assert!(matches!(
            op.apply(&sample_content()),
            Err(EditError::InvalidSection(ref s)) if s == "about"
        ));
    }

    #[test]
    fn update_by_id_target() {
        let op = EditOp::UpdateItem {
            section: "reviews".to_string(),
            list: "items".to_string(),
            at: ItemTarget::Id(ItemId::new("r3")),
            field: "rating".to_string(),
            value: FieldValue::Integer(4),
        };
        let content = op.apply(&sample_content()).unwrap();
        assert_eq!(content.reviews.items[2].rating, 4);
        assert_eq!(op.to_string(), "update reviews.items#r3.rating");
    }

    #[test]
    fn load_script_missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = load_script(&tmp.path().join("edits.toml"));
        assert!(matches!(result, Err(ScriptError::Io(_))));
    }
}
