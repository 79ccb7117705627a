//! Typed field selectors and per-section defaults.
//!
//! Optional fields set to an empty string are stored as absent.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem, SkillItem,
};

/// A sequence section of the resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Skills => "Skill",
            Section::Projects => "Project",
            Section::Certifications => "Certification",
        }
    }

    /// Sections that must keep at least one row in the editor.
    pub fn is_required(&self) -> bool {
        matches!(self, Section::Education | Section::Experience | Section::Skills)
    }

    /// Default numbered label for the row at `index` (0-based), e.g. "Education #1".
    pub fn row_label(&self, index: usize) -> String {
        format!("{} #{}", self.title(), index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Address,
    Website,
    Linkedin,
    Github,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
    Location,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Location,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    Technologies,
    Link,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationField {
    Name,
    Issuer,
    Date,
    Link,
}

/// Skills mix a text field and a numeric one, so the edit carries its own value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SkillEdit {
    Name(String),
    Level(Option<u8>),
}

/// One field-level edit. Sequence edits locate their item by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum FieldUpdate {
    Personal {
        field: PersonalField,
        value: String,
    },
    Education {
        id: String,
        field: EducationField,
        value: String,
    },
    Experience {
        id: String,
        field: ExperienceField,
        value: String,
    },
    Skills {
        id: String,
        edit: SkillEdit,
    },
    Projects {
        id: String,
        field: ProjectField,
        value: String,
    },
    Certifications {
        id: String,
        field: CertificationField,
        value: String,
    },
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl PersonalInfo {
    pub fn set(&mut self, field: PersonalField, value: String) {
        match field {
            PersonalField::Name => self.name = value,
            PersonalField::Email => self.email = value,
            PersonalField::Phone => self.phone = value,
            PersonalField::Address => self.address = value,
            PersonalField::Website => self.website = optional(value),
            PersonalField::Linkedin => self.linkedin = optional(value),
            PersonalField::Github => self.github = optional(value),
            PersonalField::Summary => self.summary = value,
        }
    }
}

impl EducationItem {
    pub fn set(&mut self, field: EducationField, value: String) {
        match field {
            EducationField::Institution => self.institution = value,
            EducationField::Degree => self.degree = value,
            EducationField::Field => self.field = value,
            EducationField::StartDate => self.start_date = value,
            EducationField::EndDate => self.end_date = value,
            EducationField::Location => self.location = optional(value),
            EducationField::Description => self.description = optional(value),
        }
    }

    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            institution: "University Name".to_string(),
            degree: "Degree".to_string(),
            field: "Field of Study".to_string(),
            start_date: "20XX".to_string(),
            end_date: "20XX".to_string(),
            location: None,
            description: None,
        }
    }
}

impl ExperienceItem {
    pub fn set(&mut self, field: ExperienceField, value: String) {
        match field {
            ExperienceField::Company => self.company = value,
            ExperienceField::Position => self.position = value,
            ExperienceField::StartDate => self.start_date = value,
            ExperienceField::EndDate => self.end_date = value,
            ExperienceField::Location => self.location = optional(value),
            ExperienceField::Description => self.description = value,
        }
    }

    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            company: "Company Name".to_string(),
            position: "Job Title".to_string(),
            start_date: "20XX".to_string(),
            end_date: "Present".to_string(),
            location: None,
            description: "Describe your responsibilities and achievements.".to_string(),
        }
    }
}

/// Level given to newly added skills.
pub const DEFAULT_SKILL_LEVEL: u8 = 3;

impl SkillItem {
    pub fn apply(&mut self, edit: SkillEdit) {
        match edit {
            SkillEdit::Name(name) => self.name = name,
            // Stored as given; out-of-range levels are a display concern.
            SkillEdit::Level(level) => self.level = level,
        }
    }

    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "New Skill".to_string(),
            level: Some(DEFAULT_SKILL_LEVEL),
        }
    }
}

impl ProjectItem {
    pub fn set(&mut self, field: ProjectField, value: String) {
        match field {
            ProjectField::Name => self.name = value,
            ProjectField::Description => self.description = value,
            ProjectField::Technologies => self.technologies = optional(value),
            ProjectField::Link => self.link = optional(value),
            ProjectField::StartDate => self.start_date = optional(value),
            ProjectField::EndDate => self.end_date = optional(value),
        }
    }

    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "Project Name".to_string(),
            description: "Describe the project and your role in it.".to_string(),
            technologies: None,
            link: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl CertificationItem {
    pub fn set(&mut self, field: CertificationField, value: String) {
        match field {
            CertificationField::Name => self.name = value,
            CertificationField::Issuer => self.issuer = value,
            CertificationField::Date => self.date = value,
            CertificationField::Link => self.link = optional(value),
        }
    }

    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "Certification Name".to_string(),
            issuer: "Issuing Organization".to_string(),
            date: "20XX".to_string(),
            link: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_labels_are_one_based() {
        assert_eq!(Section::Education.row_label(0), "Education #1");
        assert_eq!(Section::Skills.row_label(2), "Skill #3");
    }

    #[test]
    fn test_empty_optional_value_clears_field() {
        let mut item = ExperienceItem::placeholder("x".to_string());
        item.set(ExperienceField::Location, "Remote".to_string());
        assert_eq!(item.location.as_deref(), Some("Remote"));
        item.set(ExperienceField::Location, String::new());
        assert_eq!(item.location, None);
    }

    #[test]
    fn test_empty_required_value_is_kept() {
        let mut item = ExperienceItem::placeholder("x".to_string());
        item.set(ExperienceField::Company, String::new());
        assert_eq!(item.company, "");
    }

    #[test]
    fn test_placeholders_have_non_empty_labels() {
        let edu = EducationItem::placeholder("1".to_string());
        let exp = ExperienceItem::placeholder("1".to_string());
        let skill = SkillItem::placeholder("1".to_string());
        let project = ProjectItem::placeholder("1".to_string());
        let cert = CertificationItem::placeholder("1".to_string());
        assert!(!edu.institution.is_empty() && !edu.degree.is_empty());
        assert!(!exp.company.is_empty() && !exp.position.is_empty());
        assert_eq!(skill.level, Some(DEFAULT_SKILL_LEVEL));
        assert!(!project.name.is_empty());
        assert!(!cert.name.is_empty() && !cert.issuer.is_empty());
    }

    #[test]
    fn test_field_update_wire_format() {
        let update: FieldUpdate = serde_json::from_value(json!({
            "section": "education",
            "id": "1",
            "field": "start_date",
            "value": "2018"
        }))
        .unwrap();
        assert_eq!(
            update,
            FieldUpdate::Education {
                id: "1".to_string(),
                field: EducationField::StartDate,
                value: "2018".to_string()
            }
        );
    }

    #[test]
    fn test_skill_edit_wire_format() {
        let update: FieldUpdate = serde_json::from_value(json!({
            "section": "skills",
            "id": "2",
            "edit": {"field": "level", "value": 4}
        }))
        .unwrap();
        assert_eq!(
            update,
            FieldUpdate::Skills {
                id: "2".to_string(),
                edit: SkillEdit::Level(Some(4))
            }
        );

        let cleared: SkillEdit =
            serde_json::from_value(json!({"field": "level", "value": null})).unwrap();
        assert_eq!(cleared, SkillEdit::Level(None));
    }
}
