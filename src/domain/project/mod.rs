//! Project context supplied by the caller with each request.

mod context;

pub use context::{ProjectContext, ProjectPhase, TransformationType};
