//! Form/edit controller - The create/edit state machine behind an admin CRUD screen.
//!
//! A controller owns one [`EntityStore`], the current [`EditSession`] and the pending
//! image preview of the open form. Transitions:
//!
//! - `open_create`: any state to `Creating`
//! - `open_edit(id)`: any state to `Editing(record)`
//! - `cancel`: `Creating`/`Editing` to `Closed`, dropping the pending preview
//! - `submit(form)`: `Creating` inserts a new record, `Editing` replaces the edited one;
//!   both end in `Closed`
//!
//! Each store change is published to subscribers as a fresh snapshot.

use super::{
    forms::FormRecord,
    preview::{PreviewOutcome, PreviewPipeline},
    store::EntityStore,
};
use crate::errors::{Error, Result};
use std::path::PathBuf;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info};

/// Which form, if any, is open
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditSession<T> {
    /// No form is shown
    #[default]
    Closed,
    /// The blank "add" form is shown
    Creating,
    /// The form is pre-filled from this record
    Editing(T),
}

impl<T> EditSession<T> {
    /// Whether a create or edit form is shown
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The record being edited, if any
    #[must_use]
    pub const fn editing(&self) -> Option<&T> {
        match self {
            Self::Editing(record) => Some(record),
            _ => None,
        }
    }
}

/// Create/edit controller for one record collection.
pub struct FormController<T: FormRecord> {
    store: EntityStore<T>,
    session: EditSession<T>,
    preview: PreviewPipeline,
    snapshots: watch::Sender<EntityStore<T>>,
}

impl<T: FormRecord> FormController<T> {
    /// Creates a controller over `store`, reading selected images through `preview`.
    #[must_use]
    pub fn new(store: EntityStore<T>, preview: PreviewPipeline) -> Self {
        let (snapshots, _) = watch::channel(store.clone());
        Self {
            store,
            session: EditSession::Closed,
            preview,
            snapshots,
        }
    }

    /// The current collection
    #[must_use]
    pub const fn store(&self) -> &EntityStore<T> {
        &self.store
    }

    /// The current edit session
    #[must_use]
    pub const fn session(&self) -> &EditSession<T> {
        &self.session
    }

    /// The pending image preview of the open form.
    ///
    /// While editing without a new selection this is `None`; the form falls back
    /// to the record's stored image.
    #[must_use]
    pub fn preview(&self) -> Option<String> {
        self.preview.current()
    }

    /// Receives a snapshot of the collection every time it changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<EntityStore<T>> {
        self.snapshots.subscribe()
    }

    /// Opens the blank "add" form.
    pub fn open_create(&mut self) {
        self.preview.discard();
        self.session = EditSession::Creating;
        debug!(kind = T::KIND, "Opened create form");
    }

    /// Opens the edit form pre-filled from the record with `id`.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if `id` is not in the store; the session is unchanged.
    pub fn open_edit(&mut self, id: i64) -> Result<()> {
        let record = self
            .store
            .get(id)
            .cloned()
            .ok_or(Error::RecordNotFound { kind: T::KIND, id })?;
        self.preview.discard();
        self.session = EditSession::Editing(record);
        debug!(kind = T::KIND, id, "Opened edit form");
        Ok(())
    }

    /// Closes the form and drops any pending image preview. Does nothing when closed.
    pub fn cancel(&mut self) {
        if self.session.is_open() {
            self.preview.discard();
            self.session = EditSession::Closed;
            debug!(kind = T::KIND, "Form cancelled");
        }
    }

    /// Starts reading a newly selected image for the open form.
    pub fn select_image(&self, path: impl Into<PathBuf>) -> JoinHandle<Result<PreviewOutcome>> {
        self.preview.select(path)
    }

    /// Saves the open form and closes it.
    ///
    /// Creating inserts a record with the next free identifier. Editing replaces the
    /// edited record; without a new image selection the stored image is kept.
    ///
    /// # Errors
    /// - [`Error::NoOpenForm`] when no form is open
    /// - a validation error from the form values; the form stays open and the store is untouched
    /// - [`Error::RecordNotFound`] if the edited record was removed meanwhile
    pub fn submit(&mut self, form: T::Form) -> Result<&T> {
        let (store, id) = match &self.session {
            EditSession::Closed => return Err(Error::NoOpenForm),
            EditSession::Creating => {
                let id = self.store.next_id();
                let record = T::create(id, form, self.preview.current())?;
                (self.store.insert(record)?, id)
            }
            EditSession::Editing(editing) => {
                let id = editing.id();
                let image = self.preview.current();
                let store = self
                    .store
                    .try_replace(id, |current| current.update(form, image))?;
                (store, id)
            }
        };

        self.preview.discard();
        self.session = EditSession::Closed;
        self.publish(store);
        info!(kind = T::KIND, id, "Record saved");

        self.store
            .get(id)
            .ok_or(Error::RecordNotFound { kind: T::KIND, id })
    }

    /// Removes the record with `id`. If that record is being edited, the form closes.
    ///
    /// # Errors
    /// Returns [`Error::RecordNotFound`] if `id` is not in the store.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let store = self.store.remove(id)?;
        if self.session.editing().is_some_and(|r| r.id() == id) {
            self.preview.discard();
            self.session = EditSession::Closed;
        }
        self.publish(store);
        info!(kind = T::KIND, id, "Record deleted");
        Ok(())
    }

    /// Inserts an already-built record, e.g. when seeding from configuration.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] if the record's identifier is already taken.
    pub fn insert(&mut self, record: T) -> Result<()> {
        let store = self.store.insert(record)?;
        self.publish(store);
        Ok(())
    }

    fn publish(&mut self, store: EntityStore<T>) {
        self.store = store;
        self.snapshots.send_replace(self.store.clone());
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::forms::BookForm;
    use crate::core::preview::encode_data_url;
    use crate::entities::{Book, User};
    use crate::test_utils::{GatedReader, book_controller, book_form, user_controller, user_form};
    use std::sync::Arc;

    #[test]
    fn test_open_create_then_submit_inserts_with_next_id() -> Result<()> {
        let mut books = book_controller(Arc::new(GatedReader::default()));
        books.open_create();
        assert_eq!(books.session(), &EditSession::Creating);

        let saved = books.submit(book_form("Dune"))?;
        assert_eq!(saved.product.id, 3);
        assert_eq!(saved.title(), "Dune");
        assert_eq!(books.session(), &EditSession::Closed);
        assert_eq!(books.store().len(), 3);
        Ok(())
    }

    #[test]
    fn test_edit_replaces_in_place() -> Result<()> {
        let mut books = book_controller(Arc::new(GatedReader::default()));
        books.open_edit(1)?;
        assert_eq!(books.session().editing().map(Book::title), Some("The Great Gatsby"));

        books.submit(BookForm {
            price: 14.5,
            ..book_form("The Great Gatsby (Annotated)")
        })?;

        let first = &books.store().records()[0];
        assert_eq!(first.product.id, 1);
        assert_eq!(first.title(), "The Great Gatsby (Annotated)");
        assert_eq!(first.price(), 14.5);
        assert!(!books.session().is_open());
        Ok(())
    }

    #[test]
    fn test_open_edit_unknown_id_keeps_session() {
        let mut books = book_controller(Arc::new(GatedReader::default()));
        books.open_create();
        let result = books.open_edit(99);
        assert!(matches!(
            result.unwrap_err(),
            Error::RecordNotFound { kind: "book", id: 99 }
        ));
        assert_eq!(books.session(), &EditSession::Creating);
    }

    #[test]
    fn test_submit_without_open_form_fails() {
        let mut users = user_controller(Arc::new(GatedReader::default()));
        let result = users.submit(user_form("Nobody"));
        assert!(matches!(result.unwrap_err(), Error::NoOpenForm));
        assert_eq!(users.store().len(), 2);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut users = user_controller(Arc::new(GatedReader::default()));
        users.open_create();
        let result = users.submit(user_form(""));
        assert!(result.is_err());
        assert_eq!(users.session(), &EditSession::Creating);
        assert_eq!(users.store().len(), 2);
    }

    #[test]
    fn test_cancel_closes_and_is_idempotent() {
        let mut users = user_controller(Arc::new(GatedReader::default()));
        users.cancel();
        assert_eq!(users.session(), &EditSession::Closed);

        users.open_create();
        users.cancel();
        assert_eq!(users.session(), &EditSession::Closed);
        assert_eq!(users.store().len(), 2);
    }

    #[tokio::test]
    async fn test_new_user_gets_selected_avatar() -> Result<()> {
        let reader = Arc::new(GatedReader::default());
        let mut users = user_controller(Arc::<GatedReader>::clone(&reader));
        let gate = reader.gate("avatar.png");

        users.open_create();
        let read = users.select_image("avatar.png");
        gate.send(Ok(b"face".to_vec())).unwrap();
        read.await??;
        assert_eq!(users.preview(), Some(encode_data_url("image/png", b"face")));

        let saved = users.submit(user_form("Alice"))?;
        assert_eq!(saved.avatar, Some(encode_data_url("image/png", b"face")));
        assert!(users.preview().is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_selected_avatar() -> Result<()> {
        let reader = Arc::new(GatedReader::default());
        let mut users = user_controller(Arc::<GatedReader>::clone(&reader));
        let gate = reader.gate("avatar.png");

        users.open_create();
        let read = users.select_image("avatar.png");
        gate.send(Ok(b"face".to_vec())).unwrap();
        read.await??;

        let err = users.submit(user_form("  ")).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "name", .. }));
        assert_eq!(users.session(), &EditSession::Creating);
        assert_eq!(users.preview(), Some(encode_data_url("image/png", b"face")));

        let saved = users.submit(user_form("Alice"))?;
        assert_eq!(saved.avatar, Some(encode_data_url("image/png", b"face")));
        Ok(())
    }

    #[tokio::test]
    async fn test_cancel_discards_pending_preview() -> Result<()> {
        let reader = Arc::new(GatedReader::default());
        let mut users = user_controller(Arc::<GatedReader>::clone(&reader));
        let gate = reader.gate("avatar.png");

        users.open_edit(1)?;
        let read = users.select_image("avatar.png");
        gate.send(Ok(b"face".to_vec())).unwrap();
        read.await??;
        users.cancel();
        assert!(users.preview().is_none());

        // Re-opening and saving without a selection keeps the stored avatar.
        users.open_edit(1)?;
        let saved = users.submit(user_form("John Doe"))?;
        assert!(saved.avatar.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_without_new_image_keeps_existing_avatar() -> Result<()> {
        let reader = Arc::new(GatedReader::default());
        let mut users = user_controller(Arc::<GatedReader>::clone(&reader));
        let gate = reader.gate("first.jpg");

        users.open_edit(2)?;
        let read = users.select_image("first.jpg");
        gate.send(Ok(b"jpg".to_vec())).unwrap();
        read.await??;
        users.submit(user_form("Jane Smith"))?;

        users.open_edit(2)?;
        let saved: &User = users.submit(user_form("Jane Doe"))?;
        assert_eq!(saved.name, "Jane Doe");
        assert_eq!(saved.avatar, Some(encode_data_url("image/jpeg", b"jpg")));
        Ok(())
    }

    #[test]
    fn test_delete_closes_form_for_deleted_record() -> Result<()> {
        let mut users = user_controller(Arc::new(GatedReader::default()));
        users.open_edit(2)?;
        users.delete(2)?;
        assert_eq!(users.session(), &EditSession::Closed);
        assert!(users.store().get(2).is_none());

        users.open_edit(1)?;
        users.open_create();
        users.delete(1)?;
        assert_eq!(users.session(), &EditSession::Creating);

        assert!(matches!(
            users.delete(1).unwrap_err(),
            Error::RecordNotFound { kind: "user", id: 1 }
        ));
        Ok(())
    }

    #[test]
    fn test_ids_are_max_plus_one_across_deletes() -> Result<()> {
        let mut users = user_controller(Arc::new(GatedReader::default()));
        users.open_create();
        assert_eq!(users.submit(user_form("Third"))?.id, 3);

        users.delete(2)?;
        users.open_create();
        assert_eq!(users.submit(user_form("Fourth"))?.id, 4);
        Ok(())
    }

    #[test]
    fn test_subscribers_see_every_change() -> Result<()> {
        let mut users = user_controller(Arc::new(GatedReader::default()));
        let mut updates = users.subscribe();
        assert_eq!(updates.borrow_and_update().len(), 2);

        users.open_create();
        users.submit(user_form("Third"))?;
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().len(), 3);

        users.delete(1)?;
        assert_eq!(updates.borrow_and_update().records()[0].id, 2);
        Ok(())
    }
}
