pub mod activity;
pub mod connection;
pub mod contact;
pub mod filter;
pub mod profile;
pub mod strength;
pub mod time_serde;

pub use activity::{ActivityKind, ActivityRecord, SourceRecord};
pub use connection::{TeamConnection, build_connections, connection_strength};
pub use contact::{Approval, Contact, ContactStatus, EngagementCounters, days_since};
pub use filter::{ProfileFilter, ProfileView};
pub use profile::{ProfileStats, RelationshipProfile, Viewer, assemble_profiles, profile_stats};
pub use rapport_config::TeamMember;
pub use strength::relationship_strength;
