//! Axum route handlers for editing sessions.

use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use bytes::BytesMut;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::editor::{section_ids, Action, EditorMode, EditorState, Section};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::models::template::TemplateId;
use crate::parsing::{
    parse_document, validate_upload, ParseError, UploadedDocument, MAX_UPLOAD_BYTES,
};
use crate::render::{export_file_name, layout_for, render, render_html_document, Node};
use crate::sessions::EditorSession;
use crate::state::AppState;

const TEMPLATE_FIELD: &str = "template_id";
const FILE_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

/// A non-blocking, user-facing message about how the request was handled.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorRow {
    pub id: String,
    pub label: String,
    pub removable: bool,
}

#[derive(Debug, Serialize)]
pub struct SectionRows {
    pub section: Section,
    pub rows: Vec<EditorRow>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub template_id: TemplateId,
    pub mode: EditorMode,
    pub data: ResumeData,
    pub sections: Vec<SectionRows>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionResponse {
    fn from_session(session: EditorSession, notices: Vec<Notice>) -> Self {
        let state = &session.state;
        let sections = Section::ALL
            .into_iter()
            .map(|section| {
                let removable = state.can_remove(section);
                let rows = section_ids(&state.data, section)
                    .into_iter()
                    .enumerate()
                    .map(|(index, id)| EditorRow {
                        id: id.to_string(),
                        label: section.row_label(index),
                        removable,
                    })
                    .collect();
                SectionRows { section, rows }
            })
            .collect();

        SessionResponse {
            session_id: session.id,
            template_id: session.state.template_id,
            mode: session.state.mode,
            data: session.state.data,
            sections,
            notices,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_id: Option<String>,
    pub session: SessionResponse,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub template_id: TemplateId,
    /// The layout actually used; differs from `template_id` on fallback.
    pub rendered_with: TemplateId,
    pub document: Node,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Multipart form: `template_id` (required) and an optional `resume` file.
/// Opens an editing session seeded from the parsed file, or from the
/// placeholder resume when no file is given or parsing fails.
pub async fn handle_create_session(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let mut template_raw: Option<String> = None;
    let mut upload: Option<UploadedDocument> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        match field.name() {
            Some(TEMPLATE_FIELD) => {
                template_raw = Some(field.text().await.map_err(invalid_form)?);
            }
            Some(FILE_FIELD) => upload = read_upload(field).await?,
            _ => {}
        }
    }

    let template_raw = template_raw
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .ok_or(AppError::MissingTemplateSelection)?;

    let mut notices = Vec::new();
    let template_id = TemplateId::resolve(&template_raw);
    if TemplateId::parse(&template_raw).is_none() {
        notices.push(Notice::new(
            NoticeLevel::Info,
            format!("Template '{template_raw}' is not available; using {template_id} instead."),
        ));
    }

    let data = match upload {
        None => ResumeData::placeholder(),
        Some(document) => {
            match parse_document(state.parser.as_ref(), &document, state.config.parse_timeout)
                .await
            {
                Ok(data) => {
                    notices.push(Notice::new(
                        NoticeLevel::Success,
                        "Resume data imported successfully!",
                    ));
                    data
                }
                Err(ParseError::ParseFailure(reason)) => {
                    warn!("Import failed, starting from placeholder: {reason}");
                    notices.push(Notice::new(
                        NoticeLevel::Warning,
                        "Failed to parse resume. Please try again or enter details manually.",
                    ));
                    ResumeData::placeholder()
                }
                Err(rejected) => return Err(rejected.into()),
            }
        }
    };

    let session = state
        .sessions
        .create(EditorState::new(template_id, data))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_session(session, notices)),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionResponse::from_session(session, Vec::new())))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/actions
///
/// Applies one editor action. Removing the only row of education, experience
/// or skills is refused here so the editor always has a row to show.
pub async fn handle_apply_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<Action>,
) -> Result<Json<ActionResponse>, AppError> {
    let ids = state.ids.clone();

    let (session, added_id) = state
        .sessions
        .update(id, |editor| {
            if let Action::RemoveItem { section, id: item_id } = &action {
                let targets_existing =
                    section_ids(&editor.data, *section).contains(&item_id.as_str());
                if targets_existing && !editor.can_remove(*section) {
                    return Err(AppError::Validation(format!(
                        "{} needs at least one entry",
                        section.title()
                    )));
                }
            }
            Ok(editor.dispatch(action, ids.as_ref()))
        })
        .await?;

    Ok(Json(ActionResponse {
        added_id,
        session: SessionResponse::from_session(session, Vec::new()),
    }))
}

/// GET /api/v1/sessions/:id/preview
///
/// Rendered document tree as JSON, or HTML markup with `?format=html`.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(id).await?;
    let template_id = session.state.template_id;
    let document = render(template_id, &session.state.data);

    match query.format.as_deref() {
        None | Some("json") => Ok(Json(PreviewResponse {
            template_id,
            rendered_with: layout_for(template_id),
            document,
        })
        .into_response()),
        Some("html") => Ok(Html(document.to_html()).into_response()),
        Some(other) => Err(AppError::Validation(format!(
            "Unknown preview format '{other}', expected 'json' or 'html'"
        ))),
    }
}

/// GET /api/v1/sessions/:id/export
///
/// The current rendered state as a downloadable HTML document.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(id).await?;
    let data = &session.state.data;
    let file_name = export_file_name(data);
    let html = render_html_document(session.state.template_id, data);

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid download header: {e}")))?;

    info!("Exporting session {id} as {file_name}");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    )
        .into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Upload boundary
// ────────────────────────────────────────────────────────────────────────────

/// Reads the file part, rejecting a wrong declared type before reading any
/// content and an oversized body as soon as it passes the cap.
///
/// An empty part with no file name means no file was chosen.
async fn read_upload(mut field: Field<'_>) -> Result<Option<UploadedDocument>, AppError> {
    let file_name = field
        .file_name()
        .map(str::to_string)
        .filter(|name| !name.is_empty());
    let declared_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let mut content = BytesMut::new();
    let mut media_checked = false;

    while let Some(chunk) = field.chunk().await.map_err(invalid_form)? {
        if !media_checked {
            validate_upload(&declared_type, 0).map_err(reject_upload)?;
            media_checked = true;
        }
        let received = (content.len() + chunk.len()) as u64;
        if received > MAX_UPLOAD_BYTES {
            return Err(reject_upload(ParseError::FileTooLarge {
                size: received,
                limit: MAX_UPLOAD_BYTES,
            }));
        }
        content.extend_from_slice(&chunk);
    }

    if content.is_empty() && file_name.is_none() {
        return Ok(None);
    }

    Ok(Some(UploadedDocument::new(
        file_name,
        &declared_type,
        content.freeze(),
    )))
}

fn reject_upload(err: ParseError) -> AppError {
    warn!("Rejected upload: {err}");
    err.into()
}

fn invalid_form(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart form: {err}"))
}
