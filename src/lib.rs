pub mod api;
pub mod config;
pub mod controller;
pub mod counter;
pub mod download;
pub mod error;
pub mod logger;
pub mod models;
pub mod samples;
pub mod state;
pub mod view;

pub use api::{GenerationApi, HttpGenerationApi};
pub use config::ClientConfig;
pub use controller::GenerationFormController;
pub use counter::{CharCount, CounterLevel};
pub use download::ImageDownloader;
pub use error::{ImageGenError, Result, ValidationError};
pub use models::*;
pub use state::{FormState, PanelVisibility};
pub use view::{FormView, TerminalView};
