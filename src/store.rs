//! The in-memory comment store.
//!
//! Owns the authoritative, ordered list of comments. Every operation takes
//! the internal mutex, completes synchronously, and releases it — there is
//! no partial state for a concurrent caller to observe. Handlers share the
//! store through an `Arc` and never hold a lock across an await point.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single comment record.
///
/// `id` is assigned once at creation and never changes. Ids come from a
/// monotonically increasing counter, so a deleted comment's id is never
/// handed out again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
}

struct Inner {
    comments: Vec<Comment>,
    next_id: u64,
}

/// Ordered, mutex-guarded collection of [`Comment`] records.
///
/// Insertion order is the only ordering. All reads return owned copies;
/// mutating a returned `Comment` never touches the store.
pub struct CommentStore {
    inner: Mutex<Inner>,
}

impl CommentStore {
    /// An empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner { comments: Vec::new(), next_id: 1 }),
        }
    }

    /// A store pre-populated with the demo records the process boots with.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.create("This is the first comment");
        store.create("This is the second comment");
        store.create("This is the third comment");
        store
    }

    /// Appends a new comment and returns it. Never fails.
    pub fn create(&self, text: impl Into<String>) -> Comment {
        let mut inner = self.inner.lock();
        let comment = Comment { id: inner.next_id, text: text.into() };
        inner.next_id += 1;
        inner.comments.push(comment.clone());
        comment
    }

    /// Looks up a comment by id. Absence is not an error here — the HTTP
    /// layer decides whether a missing record is `null` or a 404.
    pub fn get(&self, id: u64) -> Option<Comment> {
        self.inner.lock().comments.iter().find(|c| c.id == id).cloned()
    }

    /// Returns comments in insertion order.
    ///
    /// With `Some(filter)`, only comments whose `text` contains the filter
    /// as a literal, case-sensitive substring are returned.
    pub fn list(&self, filter: Option<&str>) -> Vec<Comment> {
        let inner = self.inner.lock();
        match filter {
            Some(needle) => inner
                .comments
                .iter()
                .filter(|c| c.text.contains(needle))
                .cloned()
                .collect(),
            None => inner.comments.clone(),
        }
    }

    /// Replaces the `text` of the comment with the given id.
    ///
    /// Existence is checked before anything is touched; an unknown id is a
    /// typed [`Error::NotFound`], never a panic.
    pub fn update_text(&self, id: u64, text: impl Into<String>) -> Result<Comment, Error> {
        let mut inner = self.inner.lock();
        let comment = inner
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("comment {id}")))?;
        comment.text = text.into();
        Ok(comment.clone())
    }

    /// Removes the comment with the given id and returns it.
    pub fn delete(&self, id: u64) -> Result<Comment, Error> {
        let mut inner = self.inner.lock();
        let index = inner
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("comment {id}")))?;
        Ok(inner.comments.remove(index))
    }
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}
