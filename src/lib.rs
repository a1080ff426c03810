//! The "Site basics" settings screen: site title, tagline, title separator,
//! default social image and two privacy toggles, bound to a shared form
//! state with permission- and flag-gated fields.

pub mod cli;
pub mod error;
pub mod field;
pub mod form;
pub mod logging;
pub mod prefs;
pub mod report;
pub mod screen;
pub mod text;
pub mod trace;

pub use error::ScreenError;
pub use form::form_model::{FormState, FormStore};
pub use prefs::snapshot::PreferenceSnapshot;
pub use screen::screen_model::Screen;
pub use screen::session::ScreenSession;
pub use screen::site_basics::render_site_basics;
pub use text::composer::TemplateMode;
