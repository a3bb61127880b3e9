mod demo_choice;
mod run_config;
mod schema;
mod ui_choice;

pub use demo_choice::*;
pub use run_config::{OutputFormat, RunConfig};
pub use schema::{FieldKind, fields_for_kind};
pub use ui_choice::UIChoice;
