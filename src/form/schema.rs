use crate::models::{NewNote, NoteTag};
use std::str::FromStr;

pub(crate) const TITLE_MIN_CHARS: usize = 3;
pub(crate) const TITLE_MAX_CHARS: usize = 50;
pub(crate) const CONTENT_MAX_CHARS: usize = 500;

/// Raw form input. `tag` stays a string until validated.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NoteFormValues {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Default for NoteFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::default().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

fn title_error(title: &str) -> Option<String> {
    let len = title.chars().count();
    if len == 0 {
        Some("Title is required".to_string())
    } else if len < TITLE_MIN_CHARS {
        Some(format!("Title must be at least {TITLE_MIN_CHARS} characters"))
    } else if len > TITLE_MAX_CHARS {
        Some(format!("Title must be less or equal to {TITLE_MAX_CHARS} characters"))
    } else {
        None
    }
}

fn content_error(content: &str) -> Option<String> {
    (content.chars().count() > CONTENT_MAX_CHARS)
        .then(|| format!("Content must be less or equal to {CONTENT_MAX_CHARS} characters"))
}

fn parse_tag(tag: &str) -> Result<NoteTag, String> {
    NoteTag::from_str(tag).map_err(|_| {
        let allowed: Vec<&str> = NoteTag::ALL.iter().map(|t| t.as_ref()).collect();
        format!("Tag must be one of: {}", allowed.join(", "))
    })
}

/// Check `values` against the note schema. Lengths count characters, not bytes.
pub(crate) fn validate(values: &NoteFormValues) -> Result<NewNote, FieldErrors> {
    let tag = parse_tag(&values.tag);
    let errors = FieldErrors {
        title: title_error(&values.title),
        content: content_error(&values.content),
        tag: tag.as_ref().err().cloned(),
    };

    match tag {
        Ok(tag) if errors.is_empty() => Ok(NewNote {
            title: values.title.clone(),
            content: values.content.clone(),
            tag,
        }),
        _ => Err(errors),
    }
}
