use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::{
	activity::ActivityRecord,
	contact::{Contact, days_since},
	strength::to_score,
};
use rapport_config::{ConnectionWeights, TeamMember};

/// A scored link between one contact and one roster member.
///
/// Only produced for pairs with at least one matched activity record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamConnection {
	pub contact_id: String,
	pub member_name: String,
	pub member_email: String,
	pub interaction_count: u32,
	#[serde(with = "crate::time_serde::option")]
	pub last_interaction_at: Option<OffsetDateTime>,
	pub strength: u8,
}

#[derive(Default)]
struct Tally {
	count: u32,
	last: Option<OffsetDateTime>,
}

/// Ranks the roster members by how well they know `contact`.
///
/// Activity records are attributed to the contact when their free-text contact name contains
/// the contact's first name. Contacts who share a first name therefore share matches.
pub fn build_connections(
	contact: &Contact,
	roster: &[TeamMember],
	activities: &[ActivityRecord],
	weights: &ConnectionWeights,
	now: OffsetDateTime,
) -> Vec<TeamConnection> {
	let Some(first_name) = contact.first_name() else {
		return Vec::new();
	};
	let mut tallies: HashMap<&str, Tally> = HashMap::new();

	for record in activities.iter().filter(|record| record.mentions(first_name)) {
		let tally = tallies.entry(record.author_email.as_str()).or_default();

		tally.count += 1;

		if let Some(created_at) = record.created_at
			&& tally.last.is_none_or(|last| created_at > last)
		{
			tally.last = Some(created_at);
		}
	}

	let mut connections = roster
		.iter()
		.filter_map(|member| {
			let tally = tallies.get(member.email.as_str())?;
			let days = tally.last.map(|last| days_since(last, now));

			Some(TeamConnection {
				contact_id: contact.id.clone(),
				member_name: member.name.clone(),
				member_email: member.email.clone(),
				interaction_count: tally.count,
				last_interaction_at: tally.last,
				strength: connection_strength(tally.count, days, weights),
			})
		})
		.collect::<Vec<_>>();

	// Stable, so equal strengths keep roster order.
	connections.sort_by(|a, b| b.strength.cmp(&a.strength));

	connections
}

/// Scores how well one member knows a contact, from 0 to 100.
///
/// `days_since_last` is `None` when none of the matched records carried a date; the configured
/// `missing_date_days` stands in for it.
pub fn connection_strength(
	interaction_count: u32,
	days_since_last: Option<i64>,
	weights: &ConnectionWeights,
) -> u8 {
	let days = days_since_last.unwrap_or(weights.missing_date_days).max(0);
	let recency = weights.recency_window_days.saturating_sub(days).max(0) as f64;

	to_score(f64::from(interaction_count) * weights.interaction_weight + recency)
}
