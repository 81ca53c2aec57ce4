use std::cmp::Ordering;

pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single address-book entry. `id` is assigned at creation and never
/// changes; every other field is optional and mutable through a
/// [`ContactPatch`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // For backward compatibility with contacts without id.
    pub id: Uuid,

    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub favorite: bool,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// A blank record: fresh id, current timestamps, every display field
    /// empty and `favorite` off.
    pub fn new() -> Self {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            first: String::new(),
            last: String::new(),
            avatar: String::new(),
            twitter: String::new(),
            notes: String::new(),
            favorite: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first, self.last);
        let name = name.trim();
        if name.is_empty() {
            "No Name".to_string()
        } else {
            name.to_string()
        }
    }

    /// Merge a patch into this contact. Present fields overwrite, absent
    /// fields are untouched; `updated_at` is stamped either way.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(first) = patch.first {
            self.first = first;
        }
        if let Some(last) = patch.last {
            self.last = last;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(twitter) = patch.twitter {
            self.twitter = twitter;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = favorite;
        }
        self.updated_at = Utc::now();
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

/// Display order for listings: last name (case-insensitive), ties broken by
/// creation time.
pub fn display_order(a: &Contact, b: &Contact) -> Ordering {
    a.last
        .to_lowercase()
        .cmp(&b.last.to_lowercase())
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// The fields of a [`Contact`] an update may touch. Absent fields are left
/// as they are.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ContactPatch {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

impl ContactPatch {
    pub fn favorite(value: bool) -> Self {
        ContactPatch {
            favorite: Some(value),
            ..ContactPatch::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
            && self.last.is_none()
            && self.avatar.is_none()
            && self.twitter.is_none()
            && self.notes.is_none()
            && self.favorite.is_none()
    }
}
