use serde::{Deserialize, Serialize};

/// The closed set of template identifiers offered by the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimalist,
    Creative,
    Professional,
    Chronological,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::Professional,
        TemplateId::Chronological,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
            TemplateId::Chronological => "chronological",
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn parse(raw: &str) -> Option<TemplateId> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(raw))
    }

    /// Lookup that never fails: unknown identifiers resolve to the default (Modern).
    pub fn resolve(raw: &str) -> TemplateId {
        Self::parse(raw).unwrap_or_else(|| {
            tracing::debug!("Unknown template id '{raw}', falling back to modern");
            TemplateId::default()
        })
    }

    /// Whether a dedicated renderer exists for this template.
    pub fn is_implemented(&self) -> bool {
        matches!(self, TemplateId::Modern | TemplateId::Classic)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery metadata for a template. Carries no rendering logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeTemplate {
    pub id: TemplateId,
    pub name: String,
    pub thumbnail: String,
    pub description: String,
    /// False when the id falls back to the default layout.
    pub implemented: bool,
}

const THUMBNAIL_PLACEHOLDER: &str = "/placeholder.svg";

/// The static template gallery, in display order.
pub fn template_gallery() -> Vec<ResumeTemplate> {
    TemplateId::ALL
        .into_iter()
        .map(|id| {
            let (name, description) = match id {
                TemplateId::Modern => (
                    "Modern",
                    "Clean layout with a sidebar for a contemporary look",
                ),
                TemplateId::Classic => (
                    "Classic",
                    "Traditional format that works for all industries",
                ),
                TemplateId::Minimalist => (
                    "Minimalist",
                    "Simple and elegant design with clean typography",
                ),
                TemplateId::Creative => ("Creative", "Bold design for creative professionals"),
                TemplateId::Professional => (
                    "Professional",
                    "Sophisticated layout for executive positions",
                ),
                TemplateId::Chronological => (
                    "Chronological",
                    "Time-focused layout highlighting experience",
                ),
            };
            ResumeTemplate {
                id,
                name: name.to_string(),
                thumbnail: THUMBNAIL_PLACEHOLDER.to_string(),
                description: description.to_string(),
                implemented: id.is_implemented(),
            }
        })
        .collect()
}
