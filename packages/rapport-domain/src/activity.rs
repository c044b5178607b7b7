use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The collection an activity record was read from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
	Note,
	FollowUp,
	Activity,
}
impl ActivityKind {
	pub const ALL: [Self; 3] = [Self::Note, Self::FollowUp, Self::Activity];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Note => "note",
			Self::FollowUp => "follow_up",
			Self::Activity => "activity",
		}
	}
}

/// A record as returned by one of the activity collections.
///
/// Collections carry more fields than these; anything else is ignored on read.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SourceRecord {
	#[serde(default)]
	pub contact_name: Option<String>,
	#[serde(default)]
	pub author_email: String,
	#[serde(default, with = "crate::time_serde::option")]
	pub created_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActivityRecord {
	pub kind: ActivityKind,
	pub contact_name: Option<String>,
	pub author_email: String,
	#[serde(with = "crate::time_serde::option")]
	pub created_at: Option<OffsetDateTime>,
}
impl ActivityRecord {
	pub fn tagged(kind: ActivityKind, record: SourceRecord) -> Self {
		Self {
			kind,
			contact_name: record.contact_name,
			author_email: record.author_email,
			created_at: record.created_at,
		}
	}

	/// Loose match: the record's free-text contact name contains `first_name` verbatim.
	pub fn mentions(&self, first_name: &str) -> bool {
		self.contact_name.as_deref().map(|name| name.contains(first_name)).unwrap_or(false)
	}
}
