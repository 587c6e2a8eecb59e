pub mod accent;
pub mod clipboard;
pub mod content;
pub mod filter;
pub mod modal;
pub mod pointer;
pub mod preference;
pub mod scroll_spy;
pub mod section;
pub mod style_vars;
pub mod toast;

pub use accent::{Accent, AccentPreset, ACCENT_PALETTE};
pub use clipboard::{copy_toast_message, COPY_FAILED_MESSAGE};
pub use content::{Experience, Profile, Project, ProjectLinks, SkillGroup};
pub use content::{EXPERIENCE, PROFILE, PROJECTS, SKILL_GROUPS};
pub use filter::{tag_vocabulary, visible_projects, TagFilter, ALL_TAGS_LABEL};
pub use modal::{is_cancel_key, ModalActions, ModalState};
pub use pointer::SpotlightPosition;
pub use preference::{AccentPreference, KeyValueStore, StorageError, ACCENT_KEY};
pub use scroll_spy::{IntersectionSample, ScrollSpy, SPY_ROOT_MARGIN, SPY_THRESHOLDS};
pub use section::{SectionId, SECTION_ORDER};
pub use toast::{ToastState, ToastTicket, MESSAGE_SENT, TOAST_DURATION_MS};
