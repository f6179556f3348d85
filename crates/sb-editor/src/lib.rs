//! Sitebuild Editor
//!
//! Editing session for the page builder: the canvas sends drag, drop and
//! edit events, the session validates them against the component registry
//! and applies them to the page tree.
//!
//! # Example
//! ```rust
//! use sb_editor::{Config, Editor, EditOutcome};
//!
//! let mut editor = Editor::with_standard_registry(Config::default());
//! let EditOutcome::Inserted(section) = editor.drop_component("Section", None).unwrap() else {
//!     unreachable!()
//! };
//! let outcome = editor.drop_component("Heading", Some(&section)).unwrap();
//! assert!(matches!(outcome, EditOutcome::Inserted(_)));
//! ```

mod config;
mod editor;
mod event;
mod palette;

pub use config::Config;
pub use editor::{Editor, EditorError, EditorResult};
pub use event::{EditOutcome, EditorEvent};
pub use palette::{build_palette, PaletteGroup, PaletteItem};

// Re-export sub-crates for advanced usage
pub use sb_registry as registry;
pub use sb_tree as tree;

/// Editor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
