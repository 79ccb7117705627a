//! Editing sessions: one `EditorState` per open editor, addressed by id.

pub mod handlers;
pub mod store;

pub use store::{EditorSession, SessionStore};
