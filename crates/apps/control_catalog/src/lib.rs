//! Story catalog and demo page for the `control_kit` controls.
//!
//! Stories are plain data ([`stories`]) so the same permutations drive the
//! live Leptos canvas and the presentation-tree assertions in the tests.
//! Interactive stories run on the models in [`interactions`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
pub mod config;
pub mod interactions;
pub mod stories;

pub use app::{ControlCatalog, DemoPage, StoryCanvas};
pub use config::{CanvasLayout, CatalogConfig, CatalogConfigError};
pub use interactions::{CallLog, CheckboxToggle, RadioToggle};
pub use stories::{all_stories, find_story, ComponentKind, Story, StoryArgs};
