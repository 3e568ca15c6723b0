use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Default page size used by the notes list.
pub(crate) const PER_PAGE: u32 = 12;

/// Fixed tag vocabulary accepted by NoteHub.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    IntoStaticStr,
)]
pub(crate) enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn names() -> Vec<&'static str> {
        Self::ALL.into_iter().map(<&'static str>::from).collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    /// Opaque, server-assigned. Never generated or rewritten locally.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `POST /notes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct NewNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotesPage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum SortBy {
    Created,
    Updated,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ListNotesParams {
    pub search: String,
    pub page: u32,
    pub per_page: u32,
    pub tag: Option<NoteTag>,
    pub sort_by: Option<SortBy>,
}

impl ListNotesParams {
    pub fn new(search: impl Into<String>, page: u32) -> Self {
        Self {
            search: search.into(),
            page,
            per_page: PER_PAGE,
            tag: None,
            sort_by: None,
        }
    }
}
