//! `aipm-core` — identifiers, closed enums and view models.
//!
//! This crate contains **pure domain** types (no I/O). Authoritative storage for
//! every entity lives in the remote API; these are the normalized shapes the
//! rest of the workspace consumes.

pub mod conversation;
pub mod error;
pub mod health;
pub mod id;
mod label;
pub mod persona;
pub mod project;
pub mod requirement;

pub use conversation::ConversationTurn;
pub use error::{DomainError, DomainResult, non_blank};
pub use health::Health;
pub use id::{
    ClientId, ClusterId, ConversationTurnId, OrganizationId, PersonaId, ProjectId, RequirementId,
    UserId,
};
pub use persona::{Persona, PersonaRole, PersonaSummary};
pub use project::{ProjectBase, ProjectDetail, ProjectStatus, ProjectSummary};
pub use requirement::{Requirement, RequirementCounts, RequirementType};
