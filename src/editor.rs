//! Content editing operations.
//!
//! Every operation takes the current [`SiteContent`] by reference and returns
//! a complete replacement document. Nothing is patched in place, so a failed
//! edit leaves the caller's document exactly as it was.
//!
//! ## Schema-Driven Editing
//!
//! Fields and lists are addressed by their serialized names
//! (`"franchise"`, `"contactPhone"`, `"items"`). An edit runs against a JSON
//! draft of the document and the draft is deserialized back into the typed
//! tree, so the Rust types are the schema:
//!
//! - a name that is not in the draft is rejected before anything changes;
//! - a value of the wrong shape fails deserialization and is reported as
//!   [`EditError::InvalidValue`] for that field.
//!
//! ## Addressing List Items
//!
//! List operations come in two flavours. Index-addressed operations mirror the
//! admin panel's row buttons; id-addressed ones (`*_by_id`) resolve the
//! position from the item's [`ItemId`] at the moment of the edit and stay
//! correct if rows moved in between.

use crate::content::{
    BenefitItem, FranchiseStat, InteriorItem, ItemId, MenuItem, ReviewItem, Section, SiteContent,
    StartupCostItem, StoreLocation,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditError {
    #[error("unknown section '{0}'")]
    InvalidSection(String),
    #[error("'{section}' has no editable field '{field}'")]
    InvalidField { section: String, field: String },
    #[error("index {index} is out of range for {target} (length {len})")]
    IndexOutOfRange {
        target: String,
        index: usize,
        len: usize,
    },
    #[error("no item with id '{id}' in {target}")]
    ItemNotFound { target: String, id: ItemId },
    #[error("invalid value for {target}: {source}")]
    InvalidValue {
        target: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A value written into an item field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Flag(b) => Value::Bool(b),
            FieldValue::Integer(n) => Value::from(n),
            FieldValue::Number(n) => Value::from(n),
            FieldValue::Text(s) => Value::String(s),
        }
    }
}

/// Direction for [`move_section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

// =============================================================================
// Draft: the JSON view an edit runs against
// =============================================================================

struct Draft {
    root: Value,
}

impl Draft {
    fn of(content: &SiteContent) -> Result<Self, EditError> {
        Ok(Self {
            root: serde_json::to_value(content)?,
        })
    }

    fn section_mut(&mut self, section: Section) -> Result<&mut Map<String, Value>, EditError> {
        self.root
            .get_mut(section.as_str())
            .and_then(Value::as_object_mut)
            .ok_or_else(|| EditError::InvalidSection(section.as_str().to_string()))
    }

    fn list_mut(&mut self, section: Section, list: &str) -> Result<&mut Vec<Value>, EditError> {
        self.section_mut(section)?
            .get_mut(list)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| EditError::InvalidField {
                section: section.as_str().to_string(),
                field: list.to_string(),
            })
    }

    /// Convert back into the typed tree; `target` names the edited slot in errors.
    fn finish(self, target: String) -> Result<SiteContent, EditError> {
        serde_json::from_value(self.root).map_err(|source| EditError::InvalidValue { target, source })
    }
}

fn list_target(section: Section, list: &str) -> String {
    format!("{}.{}", section.as_str(), list)
}

fn position_of(items: &[Value], id: &ItemId) -> Option<usize> {
    items
        .iter()
        .position(|item| item.get("id").and_then(Value::as_str) == Some(id.as_str()))
}

// =============================================================================
// Field mutation
// =============================================================================

/// Replace one scalar text field of a section.
///
/// Lists are never reachable through this path: naming a list, a missing
/// field, or a non-text field is [`EditError::InvalidField`].
pub fn set_field(
    content: &SiteContent,
    section: Section,
    field: &str,
    value: impl Into<String>,
) -> Result<SiteContent, EditError> {
    let mut draft = Draft::of(content)?;
    let slot = draft
        .section_mut(section)?
        .get_mut(field)
        .filter(|slot| slot.is_string())
        .ok_or_else(|| EditError::InvalidField {
            section: section.as_str().to_string(),
            field: field.to_string(),
        })?;
    *slot = Value::String(value.into());
    draft.finish(format!("{}.{}", section.as_str(), field))
}

// =============================================================================
// List mutation
// =============================================================================

/// Replace one field of the item at `index`.
pub fn update_item(
    content: &SiteContent,
    section: Section,
    list: &str,
    index: usize,
    field: &str,
    value: impl Into<FieldValue>,
) -> Result<SiteContent, EditError> {
    let mut draft = Draft::of(content)?;
    let items = draft.list_mut(section, list)?;
    let len = items.len();
    let item = items.get_mut(index).ok_or_else(|| EditError::IndexOutOfRange {
        target: list_target(section, list),
        index,
        len,
    })?;
    let slot = item
        .as_object_mut()
        .filter(|_| field != "id")
        .and_then(|record| record.get_mut(field))
        .ok_or_else(|| EditError::InvalidField {
            section: list_target(section, list),
            field: field.to_string(),
        })?;
    let value: FieldValue = value.into();
    *slot = value.into();
    draft.finish(format!("{}[{}].{}", list_target(section, list), index, field))
}

/// Replace one field of the item carrying `id`.
pub fn update_item_by_id(
    content: &SiteContent,
    section: Section,
    list: &str,
    id: &ItemId,
    field: &str,
    value: impl Into<FieldValue>,
) -> Result<SiteContent, EditError> {
    let index = find_item(content, section, list, id)?;
    update_item(content, section, list, index, field, value)
}

/// Append `item` to the end of a list. Existing items keep their positions.
pub fn add_item<T: Serialize + ?Sized>(
    content: &SiteContent,
    section: Section,
    list: &str,
    item: &T,
) -> Result<SiteContent, EditError> {
    let item = serde_json::to_value(item)?;
    let mut draft = Draft::of(content)?;
    draft.list_mut(section, list)?.push(item);
    draft.finish(list_target(section, list))
}

/// Remove the item at `index`; later items shift down by one.
pub fn remove_item(
    content: &SiteContent,
    section: Section,
    list: &str,
    index: usize,
) -> Result<SiteContent, EditError> {
    let mut draft = Draft::of(content)?;
    let items = draft.list_mut(section, list)?;
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            target: list_target(section, list),
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    draft.finish(list_target(section, list))
}

/// Remove the item carrying `id`.
pub fn remove_item_by_id(
    content: &SiteContent,
    section: Section,
    list: &str,
    id: &ItemId,
) -> Result<SiteContent, EditError> {
    let index = find_item(content, section, list, id)?;
    remove_item(content, section, list, index)
}

/// Current position of the item carrying `id`.
pub fn find_item(
    content: &SiteContent,
    section: Section,
    list: &str,
    id: &ItemId,
) -> Result<usize, EditError> {
    let mut draft = Draft::of(content)?;
    let items = draft.list_mut(section, list)?;
    position_of(items, id).ok_or_else(|| EditError::ItemNotFound {
        target: list_target(section, list),
        id: id.clone(),
    })
}

/// Replace the hero slides from newline-separated text. Blank lines are dropped.
pub fn set_hero_images(content: &SiteContent, text: &str) -> SiteContent {
    let mut next = content.clone();
    next.hero.images = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    next
}

/// The record an "add" button appends to a list, with a fresh id.
pub fn new_item(section: Section, list: &str) -> Result<Value, EditError> {
    let item = match (section, list) {
        (Section::Hero, "images") => {
            Value::String("https://images.unsplash.com/photo-1546069901-ba9599a7e63c".to_string())
        }
        (Section::Menu, "items") => serde_json::to_value(MenuItem {
            id: ItemId::generate(),
            name: "새 메뉴".to_string(),
            eng_name: "New Menu".to_string(),
            description: "설명".to_string(),
            image: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c".to_string(),
            price: "0".to_string(),
        })?,
        (Section::Reviews, "items") => serde_json::to_value(ReviewItem {
            id: ItemId::generate(),
            author: "새 고객".to_string(),
            rating: 5,
            content: "리뷰 내용".to_string(),
            image: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c".to_string(),
            tag: "메뉴".to_string(),
        })?,
        (Section::Benefits, "items") => serde_json::to_value(BenefitItem {
            id: ItemId::generate(),
            title: "새 혜택".to_string(),
            desc: "설명 입력".to_string(),
            image: None,
        })?,
        (Section::Interior, "items") => serde_json::to_value(InteriorItem {
            id: ItemId::generate(),
            name: "새 인테리어".to_string(),
            image: "https://images.unsplash.com/photo-1554118811-1e0d58224f24".to_string(),
        })?,
        (Section::StartupCost, "items") => serde_json::to_value(StartupCostItem {
            id: ItemId::generate(),
            category: "새 항목".to_string(),
            price: "0원".to_string(),
            original_price: None,
            highlight: false,
            image: None,
        })?,
        (Section::Locations, "list") => serde_json::to_value(StoreLocation {
            id: ItemId::generate(),
            name: "새 지점".to_string(),
            address: "주소 입력".to_string(),
            lat: 37.5,
            lng: 127.0,
        })?,
        (Section::Franchise, "stats") => serde_json::to_value(FranchiseStat {
            id: ItemId::generate(),
            highlight: "0".to_string(),
            title: "새 지표".to_string(),
            subtitle: "설명".to_string(),
        })?,
        _ => {
            return Err(EditError::InvalidField {
                section: section.as_str().to_string(),
                field: list.to_string(),
            });
        }
    };
    Ok(item)
}

// =============================================================================
// Section reorder
// =============================================================================

/// Swap the section at `index` with its neighbour in `direction`.
///
/// Moving the first entry up or the last entry down returns an unchanged
/// copy. An `index` past the end of the list is an error.
pub fn move_section(
    content: &SiteContent,
    index: usize,
    direction: Direction,
) -> Result<SiteContent, EditError> {
    let len = content.section_order.len();
    if index >= len {
        return Err(EditError::IndexOutOfRange {
            target: "sectionOrder".to_string(),
            index,
            len,
        });
    }
    let mut next = content.clone();
    match direction {
        Direction::Up if index > 0 => next.section_order.swap(index, index - 1),
        Direction::Down if index + 1 < len => next.section_order.swap(index, index + 1),
        _ => {}
    }
    Ok(next)
}
