pub mod config;
pub mod diff;
pub mod editor;
pub mod engine;
pub mod error;
pub mod input;
pub mod plan;
pub mod platform;
pub mod prompt;
pub mod rename;
pub mod scratch;

pub use config::AppConfig;
pub use editor::{CommandEditor, Editor};
pub use engine::{Renamer, RunSummary};
pub use error::Error;
pub use plan::FilePair;
pub use scratch::{Outcome, ScratchFile};
