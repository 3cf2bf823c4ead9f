//! # Franchise Site
//!
//! Builds a single-page franchise marketing site from one editable content
//! document. The page is a hero banner followed by reorderable blocks
//! (reviews, benefits, interior photos, startup costs, menu, store map,
//! franchise inquiry) framed by a navigation bar, a footer, and a sticky
//! quick-consult bar.
//!
//! # Architecture: Document → Edits → Page
//!
//! ```text
//! 1. Load      content.json | built-in  →  SiteContent
//! 2. Edit      edits.toml               →  SiteContent (whole-document replacement per step)
//! 3. Generate  SiteContent + config     →  dist/index.html
//! ```
//!
//! The document is plain data. Editing never mutates it in place: every
//! operation returns a new document and the [`store::ContentStore`] swaps it
//! in, so a failed edit has no effect and every observer sees each revision.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | The typed document, section vocabulary, item identity, built-in defaults |
//! | [`editor`] | Field, list, and section-order edits producing replacement documents |
//! | [`store`] | Owner of the live document: revisions and change notification |
//! | [`script`] | TOML edit scripts replayed against the store |
//! | [`generate`] | Renders the page from the document using Maud |
//! | [`geo`] | Linear lat/lng → map-percentage pin placement |
//! | [`contact`] | Quick-consult and inquiry gating, `mailto:` composition |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Types Are the Schema
//!
//! Edits address fields by their serialized names and run against a JSON view
//! of the document, which is then deserialized back into [`content::SiteContent`].
//! Unknown names are rejected and wrongly typed values fail to deserialize,
//! so there is no separate schema to keep in sync with the structs.
//!
//! ## Closed Section Vocabulary
//!
//! `sectionOrder` entries are a closed enum, [`content::SectionKey`]. Tokens
//! outside the set survive loading as `Unknown` so the document round-trips,
//! but they render nothing. Renderers match exhaustively, so adding a section
//! is a compile error until it is rendered.
//!
//! ## Synthetic Item Identity
//!
//! Every list record carries an [`content::ItemId`]; documents without ids get
//! UUIDs at load time. Edits can address items by position (the admin panel's
//! row buttons) or by identity, which stays correct after rows move.
//!
//! ## No Persistence
//!
//! The content file is read, never written. Edit scripts describe a session;
//! `dump-content` prints the result for the operator to keep if they want.

pub mod config;
pub mod contact;
pub mod content;
pub mod editor;
pub mod generate;
pub mod geo;
pub mod output;
pub mod script;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
