//! Editor State Controller: owns one resume for the length of an editing session.
//!
//! The resume only changes through `reducer::reduce`; `EditorState` adds the
//! selected template and the edit/preview mode on top.

pub mod fields;
pub mod ids;
pub mod reducer;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;
use crate::models::template::TemplateId;

pub use fields::Section;
#[cfg(test)]
pub use ids::SequentialIdGenerator;
pub use ids::{IdGenerator, UuidIdGenerator};
pub use reducer::{reduce, section_ids, Action, Reduction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

impl EditorMode {
    pub fn toggled(self) -> Self {
        match self {
            EditorMode::Edit => EditorMode::Preview,
            EditorMode::Preview => EditorMode::Edit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub template_id: TemplateId,
    pub mode: EditorMode,
    pub data: ResumeData,
}

impl EditorState {
    pub fn new(template_id: TemplateId, data: ResumeData) -> Self {
        Self {
            template_id,
            mode: EditorMode::default(),
            data,
        }
    }

    /// Applies one action and returns the id of any newly added item.
    pub fn dispatch(&mut self, action: Action, ids: &dyn IdGenerator) -> Option<String> {
        if action == Action::ToggleMode {
            self.mode = self.mode.toggled();
        }

        // Take the snapshot out, reduce, and put the next snapshot back.
        let data = std::mem::replace(&mut self.data, ResumeData::placeholder());
        let Reduction { data, added_id } = reduce(data, action, ids);
        self.data = data;
        added_id
    }

    /// Whether the presentation layer should offer removal for a row in `section`.
    pub fn can_remove(&self, section: Section) -> bool {
        !section.is_required() || section_ids(&self.data, section).len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_edit_mode() {
        let state = EditorState::new(TemplateId::Classic, ResumeData::placeholder());
        assert_eq!(state.mode, EditorMode::Edit);
        assert_eq!(state.template_id, TemplateId::Classic);
    }

    #[test]
    fn test_toggle_flips_mode_without_touching_data() {
        let ids = SequentialIdGenerator::new("t");
        let mut state = EditorState::new(TemplateId::Modern, ResumeData::placeholder());

        state.dispatch(Action::ToggleMode, &ids);
        assert_eq!(state.mode, EditorMode::Preview);
        assert_eq!(state.data, ResumeData::placeholder());

        state.dispatch(Action::ToggleMode, &ids);
        assert_eq!(state.mode, EditorMode::Edit);
    }

    #[test]
    fn test_dispatch_returns_added_id() {
        let ids = SequentialIdGenerator::new("t");
        let mut state = EditorState::new(TemplateId::Modern, ResumeData::placeholder());

        let id = state.dispatch(
            Action::AddItem {
                section: Section::Experience,
            },
            &ids,
        );
        assert_eq!(id.as_deref(), Some("t-1"));
        assert_eq!(state.data.experience.len(), 2);
        assert_eq!(state.mode, EditorMode::Edit);
    }

    #[test]
    fn test_can_remove_keeps_one_required_row() {
        let ids = SequentialIdGenerator::new("t");
        let mut state = EditorState::new(TemplateId::Modern, ResumeData::placeholder());

        assert!(!state.can_remove(Section::Education));
        assert!(state.can_remove(Section::Skills));
        assert!(state.can_remove(Section::Projects));

        state.dispatch(
            Action::AddItem {
                section: Section::Education,
            },
            &ids,
        );
        assert!(state.can_remove(Section::Education));
    }
}
