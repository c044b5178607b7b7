use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub roster: Vec<TeamMember>,
	#[serde(default)]
	pub scoring: Scoring,
	#[serde(default)]
	pub thresholds: Thresholds,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// An internal team member eligible to hold a connection to a contact.
///
/// The email is the identity used to attribute activity records and to recognize the viewer.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
	pub name: String,
	pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scoring {
	pub relationship: RelationshipWeights,
	pub connection: ConnectionWeights,
}

/// Weights for the contact-level relationship strength.
///
/// Each of the three terms is capped on its own (`recency_max`, `frequency_cap`,
/// `engagement_cap`), and validation keeps the caps summing to at most 100.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RelationshipWeights {
	pub recency_max: f64,
	pub recency_decay_per_day: f64,
	pub email_open_weight: f64,
	pub meeting_weight: f64,
	pub reply_weight: f64,
	pub note_weight: f64,
	pub frequency_cap: f64,
	pub engagement_reply_weight: f64,
	pub engagement_meeting_weight: f64,
	pub engagement_cap: f64,
}
impl Default for RelationshipWeights {
	fn default() -> Self {
		Self {
			recency_max: 40.0,
			recency_decay_per_day: 0.5,
			email_open_weight: 2.0,
			meeting_weight: 8.0,
			reply_weight: 5.0,
			note_weight: 1.0,
			frequency_cap: 30.0,
			engagement_reply_weight: 10.0,
			engagement_meeting_weight: 5.0,
			engagement_cap: 30.0,
		}
	}
}

/// Weights for the per-member connection strength.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ConnectionWeights {
	pub interaction_weight: f64,
	pub recency_window_days: i64,
	/// Day count assumed when a member has matches but no usable date.
	pub missing_date_days: i64,
}
impl Default for ConnectionWeights {
	fn default() -> Self {
		Self { interaction_weight: 15.0, recency_window_days: 40, missing_date_days: 999 }
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Thresholds {
	pub strong_min_strength: u8,
	/// A contact is at risk once strictly more than this many days have passed.
	pub at_risk_after_days: i64,
}
impl Default for Thresholds {
	fn default() -> Self {
		Self { strong_min_strength: 50, at_risk_after_days: 30 }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
