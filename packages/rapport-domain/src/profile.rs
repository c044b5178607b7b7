use serde::Serialize;
use time::OffsetDateTime;

use crate::{
	activity::ActivityRecord,
	connection::{TeamConnection, build_connections},
	contact::{Contact, ContactStatus},
	strength::relationship_strength,
};
use rapport_config::Config;

/// The person looking at the relationship view.
///
/// An anonymous viewer owns no connections.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Viewer {
	email: Option<String>,
}
impl Viewer {
	pub fn new(email: impl Into<String>) -> Self {
		let email = email.into().trim().to_string();

		if email.is_empty() {
			return Self::anonymous();
		}

		Self { email: Some(email) }
	}

	pub fn anonymous() -> Self {
		Self { email: None }
	}

	pub fn email(&self) -> Option<&str> {
		self.email.as_deref()
	}

	pub fn owns(&self, connection: &TeamConnection) -> bool {
		self.email.as_deref() == Some(connection.member_email.as_str())
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelationshipProfile {
	pub contact_id: String,
	pub name: String,
	pub company: String,
	pub status: ContactStatus,
	pub owner: Option<String>,
	pub pipeline_value: f64,
	pub strength: u8,
	pub days_since_last_contact: i64,
	pub strong: bool,
	pub at_risk: bool,
	/// Strongest first.
	pub connections: Vec<TeamConnection>,
	pub my_connections: Vec<TeamConnection>,
	pub best_intro: Option<TeamConnection>,
	pub total_interactions: u32,
	#[serde(with = "crate::time_serde::option")]
	pub last_interaction_at: Option<OffsetDateTime>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ProfileStats {
	pub total: usize,
	pub average_strength: u8,
	pub strong: usize,
	pub at_risk: usize,
	pub total_connections: usize,
}

/// Builds one profile per visible contact, strongest relationship first.
///
/// This is a pure function of its inputs: no state survives between calls, and identical inputs
/// produce identically ordered output.
pub fn assemble_profiles(
	cfg: &Config,
	contacts: &[Contact],
	activities: &[ActivityRecord],
	viewer: &Viewer,
	now: OffsetDateTime,
) -> Vec<RelationshipProfile> {
	let mut profiles = contacts
		.iter()
		.filter(|contact| contact.is_visible())
		.map(|contact| assemble_profile(cfg, contact, activities, viewer, now))
		.collect::<Vec<_>>();

	profiles.sort_by(|a, b| b.strength.cmp(&a.strength));

	profiles
}

fn assemble_profile(
	cfg: &Config,
	contact: &Contact,
	activities: &[ActivityRecord],
	viewer: &Viewer,
	now: OffsetDateTime,
) -> RelationshipProfile {
	let days_since_last_contact = contact.days_since_last_contact(now);
	let strength = relationship_strength(
		days_since_last_contact,
		&contact.counters(),
		&cfg.scoring.relationship,
	);
	let connections =
		build_connections(contact, &cfg.roster, activities, &cfg.scoring.connection, now);
	let my_connections = connections
		.iter()
		.filter(|connection| viewer.owns(connection))
		.cloned()
		.collect::<Vec<_>>();
	let best_intro = connections.first().cloned();
	let total_interactions =
		connections.iter().map(|connection| connection.interaction_count).sum::<u32>();
	let last_interaction_at =
		connections.iter().filter_map(|connection| connection.last_interaction_at).max();

	RelationshipProfile {
		contact_id: contact.id.clone(),
		name: contact.name.clone(),
		company: contact.company.clone(),
		status: contact.status,
		owner: contact.owner.clone(),
		pipeline_value: contact.pipeline_value,
		strength,
		days_since_last_contact,
		strong: strength >= cfg.thresholds.strong_min_strength,
		at_risk: days_since_last_contact > cfg.thresholds.at_risk_after_days,
		connections,
		my_connections,
		best_intro,
		total_interactions,
		last_interaction_at,
	}
}

/// Summarizes a set of profiles in one pass. An empty set averages to zero.
pub fn profile_stats(profiles: &[RelationshipProfile]) -> ProfileStats {
	let mut stats = ProfileStats { total: profiles.len(), ..Default::default() };
	let mut strength_sum = 0_u64;

	for profile in profiles {
		strength_sum += u64::from(profile.strength);

		if profile.strong {
			stats.strong += 1;
		}
		if profile.at_risk {
			stats.at_risk += 1;
		}

		stats.total_connections += profile.connections.len();
	}

	if !profiles.is_empty() {
		stats.average_strength = (strength_sum as f64 / profiles.len() as f64).round() as u8;
	}

	stats
}
