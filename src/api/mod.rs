use crate::config::ClientConfig;
use crate::models::{ListNotesParams, NewNote, Note, NotesPage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) mod mock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

/// Transport failure. Authorization failures carry their own kind but are
/// rendered exactly like any other error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized(body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: server_message(body).unwrap_or_else(|| "Unauthorized".to_string()),
        }
    }

    fn http(status: reqwest::StatusCode, body: &str, ctx: &str) -> Self {
        let detail = server_message(body).unwrap_or_else(|| body.trim().to_string());
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {detail}"),
        }
    }

    fn rejected(payload: ErrorPayload) -> Self {
        let message = match payload.error {
            Some(detail) if !detail.trim().is_empty() => format!("{}: {detail}", payload.message),
            _ => payload.message,
        };
        Self {
            kind: ApiErrorKind::Http,
            message,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by NoteHub on failed writes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ErrorPayload {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .map(|p| p.message)
        .filter(|m| !m.trim().is_empty())
}

/// `POST /notes` answers with either the created note or an error payload.
#[derive(Deserialize, Clone, Debug)]
#[serde(untagged)]
pub(crate) enum CreateNoteResponse {
    Created(Note),
    Rejected(ErrorPayload),
}

impl CreateNoteResponse {
    pub(crate) fn into_result(self) -> ApiResult<Note> {
        match self {
            CreateNoteResponse::Created(note) => Ok(note),
            CreateNoteResponse::Rejected(payload) => Err(ApiError::rejected(payload)),
        }
    }
}

/// The four remote operations the client depends on.
#[async_trait(?Send)]
pub(crate) trait NotesApi {
    async fn list_notes(&self, params: &ListNotesParams) -> ApiResult<NotesPage>;
    async fn create_note(&self, note: &NewNote) -> ApiResult<Note>;
    async fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note>;
    async fn delete_note(&self, id: &str) -> ApiResult<Note>;
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub(crate) fn auth_header(&self) -> String {
        format!("Bearer {}", self.config.token)
    }

    pub(crate) fn notes_url(&self) -> String {
        format!("{}/notes", self.config.api_url)
    }

    pub(crate) fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.config.api_url, urlencoding::encode(id))
    }

    pub(crate) fn list_url(&self, params: &ListNotesParams) -> String {
        let mut url = format!(
            "{}?search={}&page={}&perPage={}",
            self.notes_url(),
            urlencoding::encode(&params.search),
            params.page,
            params.per_page
        );
        if let Some(tag) = params.tag {
            url.push_str(&format!("&tag={tag}"));
        }
        if let Some(sort_by) = params.sort_by {
            url.push_str(&format!("&sortBy={sort_by}"));
        }
        url
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        ctx: &str,
    ) -> ApiResult<T> {
        let res = req
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(ApiError::network)?;

        let status = res.status();
        if status.is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let body = res.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                Err(ApiError::unauthorized(&body))
            } else {
                Err(ApiError::http(status, &body, ctx))
            }
        }
    }
}

#[async_trait(?Send)]
impl NotesApi for ApiClient {
    async fn list_notes(&self, params: &ListNotesParams) -> ApiResult<NotesPage> {
        self.send(self.http.get(self.list_url(params)), "Fetching notes failed")
            .await
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        let res: CreateNoteResponse = self
            .send(self.http.post(self.notes_url()).json(note), "Creating note failed")
            .await?;
        res.into_result()
    }

    async fn fetch_note_by_id(&self, id: &str) -> ApiResult<Note> {
        self.send(self.http.get(self.note_url(id)), "Fetching note failed")
            .await
    }

    async fn delete_note(&self, id: &str) -> ApiResult<Note> {
        self.send(self.http.delete(self.note_url(id)), "Deleting note failed")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteTag, SortBy};

    fn client() -> ApiClient {
        ApiClient::new(ClientConfig::new("https://notehub.test/api/", "secret"))
    }

    #[test]
    fn test_auth_header_uses_configured_token() {
        assert_eq!(client().auth_header(), "Bearer secret");
    }

    #[test]
    fn test_list_url_always_sends_search_page_and_per_page() {
        let url = client().list_url(&ListNotesParams::new("", 1));
        assert_eq!(url, "https://notehub.test/api/notes?search=&page=1&perPage=12");
    }

    #[test]
    fn test_list_url_encodes_search_and_appends_filters() {
        let mut params = ListNotesParams::new("milk & eggs", 2);
        params.tag = Some(NoteTag::Shopping);
        params.sort_by = Some(SortBy::Updated);
        let url = client().list_url(&params);
        assert_eq!(
            url,
            "https://notehub.test/api/notes?search=milk%20%26%20eggs&page=2&perPage=12&tag=Shopping&sortBy=updated"
        );
    }

    #[test]
    fn test_note_url_passes_id_through_encoded() {
        assert_eq!(
            client().note_url("65f1c0a1b2"),
            "https://notehub.test/api/notes/65f1c0a1b2"
        );
        assert_eq!(client().note_url("a/b"), "https://notehub.test/api/notes/a%2Fb");
    }

    #[test]
    fn test_create_response_accepts_note() {
        let json = r#"{"id":"n1","title":"Buy milk","content":"","tag":"Shopping","createdAt":"","updatedAt":""}"#;
        let res: CreateNoteResponse = serde_json::from_str(json).expect("should parse");
        let note = res.into_result().expect("should be a note");
        assert_eq!(note.id, "n1");
    }

    #[test]
    fn test_create_response_maps_error_payload() {
        let json = r#"{"message":"Validation failed","error":"title is too short"}"#;
        let res: CreateNoteResponse = serde_json::from_str(json).expect("should parse");
        let err = res.into_result().expect_err("should be an error");
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.to_string(), "Validation failed: title is too short");
    }

    #[test]
    fn test_http_error_prefers_server_message() {
        let err = ApiError::http(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"message":"Bad page"}"#,
            "Fetching notes failed",
        );
        assert_eq!(err.to_string(), "Fetching notes failed (400 Bad Request): Bad page");
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = ApiError::http(
            reqwest::StatusCode::BAD_GATEWAY,
            "upstream down\n",
            "Fetching notes failed",
        );
        assert_eq!(
            err.to_string(),
            "Fetching notes failed (502 Bad Gateway): upstream down"
        );
    }

    #[test]
    fn test_unauthorized_default_message() {
        let err = ApiError::unauthorized("");
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert_eq!(err.to_string(), "Unauthorized");
    }
}
