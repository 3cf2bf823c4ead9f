//! The content store: single owner of the live document.
//!
//! The store never edits the document itself. Callers hand it a complete
//! replacement (usually produced by an [`editor`](crate::editor) function) and
//! the store swaps it in, bumps its revision, and notifies subscribers before
//! `replace` returns. Exclusive access comes from `&mut self`; there is one
//! writer and the last replacement wins.

use crate::content::SiteContent;
use crate::editor::EditError;
use std::fmt;

/// Observer invoked after every replacement with the new document and revision.
pub type Subscriber = Box<dyn FnMut(&SiteContent, u64)>;

pub struct ContentStore {
    content: SiteContent,
    revision: u64,
    subscribers: Vec<Subscriber>,
}

impl ContentStore {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Number of replacements since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&SiteContent, u64) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Swap in `content` unconditionally and notify subscribers.
    pub fn replace(&mut self, content: SiteContent) {
        self.content = content;
        self.revision += 1;
        tracing::debug!(revision = self.revision, "content replaced");
        for subscriber in &mut self.subscribers {
            subscriber(&self.content, self.revision);
        }
    }

    /// Run `edit` against the current document and replace it with the result.
    ///
    /// On error the document, revision, and subscribers are untouched.
    pub fn apply<F>(&mut self, edit: F) -> Result<(), EditError>
    where
        F: FnOnce(&SiteContent) -> Result<SiteContent, EditError>,
    {
        let next = edit(&self.content)?;
        self.replace(next);
        Ok(())
    }

    /// Discard all edits and go back to the built-in document.
    pub fn reset(&mut self) {
        self.replace(SiteContent::default());
    }

    pub fn into_content(self) -> SiteContent {
        self.content
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(SiteContent::default())
    }
}

impl fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentStore")
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;
    use crate::editor;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_store_starts_at_revision_zero() {
        let store = ContentStore::default();
        assert_eq!(store.revision(), 0);
        assert_eq!(store.content().section_order.len(), 8);
        assert_eq!(store.content().franchise.contact_phone, "1533-3711");
    }

    #[test]
    fn replace_swaps_document_and_bumps_revision() {
        let mut store = ContentStore::default();
        let mut next = store.content().clone();
        next.footer.copyright = "© 2026".to_string();
        store.replace(next);
        assert_eq!(store.revision(), 1);
        assert_eq!(store.content().footer.copyright, "© 2026");
    }

    #[test]
    fn subscribers_see_every_replacement_synchronously() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = ContentStore::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |content, revision| {
            sink.borrow_mut()
                .push((revision, content.franchise.contact_phone.clone()));
        });

        store
            .apply(|c| editor::set_field(c, Section::Franchise, "contactPhone", "02-000-0000"))
            .unwrap();
        assert_eq!(seen.borrow().as_slice(), &[(1, "02-000-0000".to_string())]);

        store.reset();
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].1, "1533-3711");
    }

    #[test]
    fn failed_apply_leaves_store_untouched() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = ContentStore::default();
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);
        let before = store.content().clone();

        let result = store.apply(|c| editor::remove_item(c, Section::Menu, "items", 99));
        assert!(result.is_err());
        assert_eq!(store.revision(), 0);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(store.content(), &before);
    }

    #[test]
    fn into_content_returns_latest_document() {
        let mut store = ContentStore::default();
        store
            .apply(|c| editor::move_section(c, 0, editor::Direction::Down))
            .unwrap();
        let content = store.into_content();
        assert_eq!(content.section_order[0].as_str(), "reviews");
    }
}
