//! `aipm-client` — typed client for the remote project API.
//!
//! All wire-format knowledge (snake_case keys, optional fields, defaults) stays
//! in this crate. Callers see only the view models from `aipm-core`.

mod endpoints;
pub mod error;
pub mod http;
pub mod normalize;
pub mod payload;
pub mod wire;

pub use error::{ClientError, ClientResult};
pub use http::{ApiClient, build_url};
pub use payload::{
    Field, IntakeExtract, NewConversationTurn, NewPersona, NewProject, NewRequirement,
    PersonaUpdate, ProjectFilter, ProjectUpdate, RequirementUpdate,
};
