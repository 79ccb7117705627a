//! Template Renderer: projects `ResumeData` into a rendered document tree.
//!
//! Rendering is a pure function of (template, data): no I/O, no clocks, no
//! randomness. Template selection goes through a fixed table with a mandatory
//! default, so gallery ids without a dedicated layout render as Modern.

pub mod classic;
pub mod export;
pub mod modern;
pub mod tree;

use crate::models::resume::ResumeData;
use crate::models::template::TemplateId;

pub use classic::ClassicTemplate;
pub use export::{export_file_name, render_html_document};
pub use modern::ModernTemplate;
pub use tree::Node;

/// A self-contained layout strategy.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, data: &ResumeData) -> Node;
}

/// Used for every id without an entry in `RENDERERS`.
const DEFAULT_RENDERER: &dyn TemplateRenderer = &ModernTemplate;

const RENDERERS: &[(TemplateId, &dyn TemplateRenderer)] = &[
    (TemplateId::Modern, &ModernTemplate),
    (TemplateId::Classic, &ClassicTemplate),
];

pub fn renderer_for(id: TemplateId) -> &'static dyn TemplateRenderer {
    RENDERERS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, renderer)| *renderer)
        .unwrap_or(DEFAULT_RENDERER)
}

/// The template whose layout is actually used for `id`.
pub fn layout_for(id: TemplateId) -> TemplateId {
    if RENDERERS.iter().any(|(key, _)| *key == id) {
        id
    } else {
        TemplateId::default()
    }
}

pub fn render(id: TemplateId, data: &ResumeData) -> Node {
    renderer_for(id).render(data)
}

/// Renders by raw identifier; unrecognized ids resolve to the default layout.
pub fn render_named(raw_id: &str, data: &ResumeData) -> Node {
    render(TemplateId::resolve(raw_id), data)
}

// ────────────────────────────────────────────────────────────────────────────
// Formatting helpers shared by the variants
// ────────────────────────────────────────────────────────────────────────────

/// Optional text that is absent or empty renders as nothing.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub(crate) fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

/// Range for items whose dates are both optional.
pub(crate) fn optional_date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(date_range(start, end)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::resume::{CertificationItem, ProjectItem, ResumeData, SkillItem};
    use crate::render::tree::{Node, ITEM_ID_ATTR};

    /// A resume with every section populated and distinctive ids.
    pub fn full_resume() -> ResumeData {
        let mut data = ResumeData::placeholder();
        data.personal_info.name = "Grace Hopper".to_string();
        data.personal_info.website = Some("hopper.dev".to_string());
        data.personal_info.github = Some(String::new());
        data.experience[0].id = "exp-b".to_string();
        data.experience.push(crate::models::resume::ExperienceItem {
            id: "exp-a".to_string(),
            company: "Navy".to_string(),
            position: "Rear Admiral".to_string(),
            start_date: "1943".to_string(),
            end_date: "1986".to_string(),
            location: None,
            description: "Compilers.".to_string(),
        });
        data.skills = vec![
            SkillItem {
                id: "sk-3".to_string(),
                name: "COBOL".to_string(),
                level: Some(5),
            },
            SkillItem {
                id: "sk-1".to_string(),
                name: "Mentoring".to_string(),
                level: None,
            },
            SkillItem {
                id: "sk-2".to_string(),
                name: "Debugging".to_string(),
                level: Some(2),
            },
        ];
        data.projects = Some(vec![ProjectItem {
            id: "pr-1".to_string(),
            name: "FLOW-MATIC".to_string(),
            description: "English-like data processing language.".to_string(),
            technologies: Some("UNIVAC".to_string()),
            link: None,
            start_date: Some("1955".to_string()),
            end_date: None,
        }]);
        data.certifications = Some(vec![CertificationItem {
            id: "ce-1".to_string(),
            name: "Computer Sciences Man of the Year".to_string(),
            issuer: "DPMA".to_string(),
            date: "1969".to_string(),
            link: Some("dpma.org".to_string()),
        }]);
        data
    }

    /// Item ids in rendered order.
    pub fn item_ids(node: &Node) -> Vec<String> {
        node.find_all(&|e| e.get_attr(ITEM_ID_ATTR).is_some())
            .into_iter()
            .filter_map(|e| e.get_attr(ITEM_ID_ATTR).map(String::from))
            .collect()
    }

    /// Item ids rendered inside the element carrying `section_class`.
    pub fn section_item_ids(node: &Node, section_class: &str) -> Vec<String> {
        node.find_all(&|e| e.has_class(section_class))
            .into_iter()
            .flat_map(|section| item_ids(&Node::Element(section.clone())))
            .collect()
    }
}
