//! The update reducer: `(ResumeData, Action) -> ResumeData`.
//!
//! Every mutation of a session's resume goes through `reduce`. Items are
//! located by id only; positions never matter. Edits that target a missing id
//! are no-ops.

use serde::{Deserialize, Serialize};

use crate::editor::fields::{FieldUpdate, Section};
use crate::editor::ids::IdGenerator;
use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, ProjectItem, ResumeData, SkillItem,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    UpdateField { edit: FieldUpdate },
    AddItem { section: Section },
    RemoveItem { section: Section, id: String },
    /// Presentation only; leaves the resume untouched.
    ToggleMode,
}

/// The next snapshot plus the id minted by an `AddItem`, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub data: ResumeData,
    pub added_id: Option<String>,
}

pub fn reduce(mut data: ResumeData, action: Action, ids: &dyn IdGenerator) -> Reduction {
    let mut added_id = None;

    match action {
        Action::UpdateField { edit } => update_field(&mut data, edit),
        Action::AddItem { section } => {
            let id = ids.next_id();
            add_item(&mut data, section, id.clone());
            added_id = Some(id);
        }
        Action::RemoveItem { section, id } => remove_item(&mut data, section, &id),
        Action::ToggleMode => {}
    }

    Reduction { data, added_id }
}

fn update_field(data: &mut ResumeData, edit: FieldUpdate) {
    match edit {
        FieldUpdate::Personal { field, value } => data.personal_info.set(field, value),
        FieldUpdate::Education { id, field, value } => {
            if let Some(item) = data.education.iter_mut().find(|e| e.id == id) {
                item.set(field, value);
            }
        }
        FieldUpdate::Experience { id, field, value } => {
            if let Some(item) = data.experience.iter_mut().find(|e| e.id == id) {
                item.set(field, value);
            }
        }
        FieldUpdate::Skills { id, edit } => {
            if let Some(item) = data.skills.iter_mut().find(|s| s.id == id) {
                item.apply(edit);
            }
        }
        FieldUpdate::Projects { id, field, value } => {
            if let Some(item) = data
                .projects
                .iter_mut()
                .flatten()
                .find(|p| p.id == id)
            {
                item.set(field, value);
            }
        }
        FieldUpdate::Certifications { id, field, value } => {
            if let Some(item) = data
                .certifications
                .iter_mut()
                .flatten()
                .find(|c| c.id == id)
            {
                item.set(field, value);
            }
        }
    }
}

fn add_item(data: &mut ResumeData, section: Section, id: String) {
    match section {
        Section::Education => data.education.push(EducationItem::placeholder(id)),
        Section::Experience => data.experience.push(ExperienceItem::placeholder(id)),
        Section::Skills => data.skills.push(SkillItem::placeholder(id)),
        Section::Projects => data
            .projects
            .get_or_insert_with(Vec::new)
            .push(ProjectItem::placeholder(id)),
        Section::Certifications => data
            .certifications
            .get_or_insert_with(Vec::new)
            .push(CertificationItem::placeholder(id)),
    }
}

fn remove_item(data: &mut ResumeData, section: Section, id: &str) {
    match section {
        Section::Education => data.education.retain(|e| e.id != id),
        Section::Experience => data.experience.retain(|e| e.id != id),
        Section::Skills => data.skills.retain(|s| s.id != id),
        Section::Projects => {
            if let Some(projects) = data.projects.as_mut() {
                projects.retain(|p| p.id != id);
            }
        }
        Section::Certifications => {
            if let Some(certifications) = data.certifications.as_mut() {
                certifications.retain(|c| c.id != id);
            }
        }
    }
}

/// Ids of the rows currently in `section`, in display order.
pub fn section_ids(data: &ResumeData, section: Section) -> Vec<&str> {
    match section {
        Section::Education => data.education.iter().map(|e| e.id.as_str()).collect(),
        Section::Experience => data.experience.iter().map(|e| e.id.as_str()).collect(),
        Section::Skills => data.skills.iter().map(|s| s.id.as_str()).collect(),
        Section::Projects => data.projects().iter().map(|p| p.id.as_str()).collect(),
        Section::Certifications => data
            .certifications()
            .iter()
            .map(|c| c.id.as_str())
            .collect(),
    }
}
