use axum::{extract::Path, Json};
use serde::Serialize;

use crate::models::resume::ResumeData;
use crate::models::template::{template_gallery, ResumeTemplate, TemplateId};
use crate::render::{layout_for, render_named, Node};

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<ResumeTemplate>> {
    Json(template_gallery())
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    /// The identifier as sent by the client.
    pub requested: String,
    pub template_id: TemplateId,
    pub layout: TemplateId,
    pub document: Node,
}

/// POST /api/v1/render/:template_id
///
/// Stateless preview of arbitrary resume data. Unknown ids render with the
/// default layout rather than failing.
pub async fn handle_render(
    Path(requested): Path<String>,
    Json(data): Json<ResumeData>,
) -> Json<RenderResponse> {
    let template_id = TemplateId::resolve(&requested);
    let document = render_named(&requested, &data);
    Json(RenderResponse {
        requested,
        template_id,
        layout: layout_for(template_id),
        document,
    })
}
