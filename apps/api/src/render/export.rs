//! Export boundary: wraps a rendered template into a standalone, downloadable document.

use crate::models::resume::ResumeData;
use crate::models::template::TemplateId;
use crate::render::{layout_for, render};

/// Renders `data` with `template` as a complete HTML5 document.
///
/// `data-template` names the layout actually used, so a fallback id records
/// the default layout.
pub fn render_html_document(template: TemplateId, data: &ResumeData) -> String {
    let body = render(template, data).to_html();

    let title = html_escape::encode_text(&data.personal_info.name);
    let layout = layout_for(template);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title} - Resume</title>\n</head>\n<body data-template=\"{layout}\">\n{body}\n</body>\n</html>\n"
    )
}

/// Download file name derived from the person's name, e.g. `jane-doe-resume.html`.
pub fn export_file_name(data: &ResumeData) -> String {
    let mut slug = String::new();
    for c in data.personal_info.name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "resume.html".to_string()
    } else {
        format!("{slug}-resume.html")
    }
}
