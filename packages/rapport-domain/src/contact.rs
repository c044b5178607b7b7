use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
	Lead,
	Contacted,
	Qualified,
	Proposal,
	Committed,
	Closed,
}
impl ContactStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Lead => "lead",
			Self::Contacted => "contacted",
			Self::Qualified => "qualified",
			Self::Proposal => "proposal",
			Self::Committed => "committed",
			Self::Closed => "closed",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Approval {
	#[default]
	Pending,
	Approved,
	Rejected,
}

/// An investor or prospect record owned by the CRM.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Contact {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub company: String,
	pub status: ContactStatus,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(default, with = "crate::time_serde::option")]
	pub last_contact_at: Option<OffsetDateTime>,
	#[serde(default)]
	pub email_opens: u32,
	#[serde(default)]
	pub email_replies: u32,
	#[serde(default)]
	pub meetings: u32,
	#[serde(default)]
	pub notes: u32,
	#[serde(default)]
	pub pipeline_value: f64,
	#[serde(default)]
	pub owner: Option<String>,
	#[serde(default)]
	pub approval: Approval,
}
impl Contact {
	/// Rejected contacts never take part in relationship scoring.
	pub fn is_visible(&self) -> bool {
		self.approval != Approval::Rejected
	}

	/// The first whitespace-delimited token of the display name, used to match free-text
	/// activity records.
	pub fn first_name(&self) -> Option<&str> {
		self.name.split_whitespace().next()
	}

	pub fn days_since_last_contact(&self, now: OffsetDateTime) -> i64 {
		days_since(self.last_contact_at.unwrap_or(self.created_at), now)
	}

	pub fn counters(&self) -> EngagementCounters {
		EngagementCounters {
			email_opens: self.email_opens,
			meetings: self.meetings,
			notes: self.notes,
			email_replies: self.email_replies,
		}
	}
}

/// Pre-aggregated engagement counters carried on a contact record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EngagementCounters {
	pub email_opens: u32,
	pub meetings: u32,
	pub notes: u32,
	pub email_replies: u32,
}

/// Whole days elapsed from `ts` to `now`, floored at zero for timestamps in the future.
pub fn days_since(ts: OffsetDateTime, now: OffsetDateTime) -> i64 {
	(now - ts).whole_days().max(0)
}

#[cfg(test)]
mod tests {
	use time::{Duration, macros::datetime};

	use crate::contact::days_since;

	#[test]
	fn partial_days_are_truncated() {
		let now = datetime!(2026-03-10 12:00 UTC);

		assert_eq!(days_since(now - Duration::hours(47), now), 1);
		assert_eq!(days_since(now - Duration::hours(48), now), 2);
	}

	#[test]
	fn future_timestamps_count_as_today() {
		let now = datetime!(2026-03-10 12:00 UTC);

		assert_eq!(days_since(now + Duration::days(3), now), 0);
	}
}
