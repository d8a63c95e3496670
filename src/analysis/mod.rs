// src/analysis/mod.rs
//
// Boundary to the external generative-vision collaborator. Everything the
// rest of the app knows about the model lives here: payload assembly, the
// HTTP call, and parsing of the structured response.

pub mod client;
pub mod events;
pub mod payload;
pub mod plugin;
pub mod response;

pub use events::AnalysisTaskResult;
pub use payload::{AnalysisInput, PhotoAttachment};
pub use plugin::AnalysisPlugin;
pub use response::{AnalysisError, SizeEstimate};
