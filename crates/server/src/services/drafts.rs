//! Session-backed pending order store.
//!
//! The clerk's in-progress drafts live in their session under a single
//! key, serialized as a [`DraftOrder`]. Each clerk only ever sees their
//! own drafts, and the session layer persists the value between
//! requests, so drafts survive server restarts.

use tower_sessions::Session;

use pronto_core::{DraftItem, DraftOrder};

use crate::models::session_keys;

/// Pending order store scoped to one clerk's session.
pub struct DraftStore<'a> {
    session: &'a Session,
}

impl<'a> DraftStore<'a> {
    /// Create a store over the given session.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Load the current draft order, empty if none has been started.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub async fn load(&self) -> Result<DraftOrder, tower_sessions::session::Error> {
        Ok(self
            .session
            .get::<DraftOrder>(session_keys::DRAFT_ORDER)
            .await?
            .unwrap_or_default())
    }

    /// Persist the draft order back to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn save(&self, draft: &DraftOrder) -> Result<(), tower_sessions::session::Error> {
        self.session.insert(session_keys::DRAFT_ORDER, draft).await
    }

    /// Append a draft item at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or modified.
    pub async fn append(
        &self,
        item: DraftItem,
    ) -> Result<DraftOrder, tower_sessions::session::Error> {
        let mut draft = self.load().await?;
        draft.append(item);
        self.save(&draft).await?;
        Ok(draft)
    }

    /// Remove the draft at the given zero-based position.
    ///
    /// Out-of-range positions are a silent no-op, matching the store's
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or modified.
    pub async fn remove_at(
        &self,
        position: usize,
    ) -> Result<DraftOrder, tower_sessions::session::Error> {
        let mut draft = self.load().await?;
        draft.remove_at(position);
        self.save(&draft).await?;
        Ok(draft)
    }

    /// Empty the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn clear(&self) -> Result<(), tower_sessions::session::Error> {
        self.session
            .remove::<DraftOrder>(session_keys::DRAFT_ORDER)
            .await?;
        Ok(())
    }
}
