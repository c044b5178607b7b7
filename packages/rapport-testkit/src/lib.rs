use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use color_eyre::eyre;
use time::{Duration, OffsetDateTime, macros::datetime};
use tokio::sync::Barrier;

use rapport_config::{Config, Scoring, Service, TeamMember, Thresholds};
use rapport_domain::{Approval, Contact, ContactStatus, SourceRecord};
use rapport_service::{ActivitySources, BoxFuture};

/// Fixed clock shared by fixtures so day counts are reproducible.
pub const NOW: OffsetDateTime = datetime!(2026-05-04 15:00 UTC);

pub fn roster() -> Vec<TeamMember> {
	vec![
		TeamMember { name: "Avery Quinn".to_string(), email: "avery@firm.example".to_string() },
		TeamMember { name: "Jordan Blake".to_string(), email: "jordan@firm.example".to_string() },
		TeamMember { name: "Sam Ortiz".to_string(), email: "sam@firm.example".to_string() },
	]
}

pub fn config() -> Config {
	Config {
		service: Service { log_level: "info".to_string() },
		roster: roster(),
		scoring: Scoring::default(),
		thresholds: Thresholds::default(),
	}
}

/// An approved contact last reached `days_since_contact` days before [`NOW`], with no
/// engagement counters.
pub fn contact(id: &str, name: &str, days_since_contact: i64) -> Contact {
	Contact {
		id: id.to_string(),
		name: name.to_string(),
		company: String::new(),
		status: ContactStatus::Lead,
		created_at: NOW - Duration::days(days_since_contact.max(0) + 30),
		last_contact_at: Some(NOW - Duration::days(days_since_contact)),
		email_opens: 0,
		email_replies: 0,
		meetings: 0,
		notes: 0,
		pipeline_value: 0.0,
		owner: None,
		approval: Approval::Approved,
	}
}

pub fn source_record(contact_name: &str, author_email: &str, days_ago: i64) -> SourceRecord {
	SourceRecord {
		contact_name: Some(contact_name.to_string()),
		author_email: author_email.to_string(),
		created_at: Some(NOW - Duration::days(days_ago)),
	}
}

#[derive(Clone, Debug)]
enum Canned {
	Records(Vec<SourceRecord>),
	Failure(String),
}
impl Default for Canned {
	fn default() -> Self {
		Self::Records(Vec::new())
	}
}

/// In-memory activity collections with per-collection failure injection.
#[derive(Default)]
pub struct StaticSources {
	notes: Canned,
	follow_ups: Canned,
	activities: Canned,
	rendezvous: Option<Arc<Barrier>>,
	calls: AtomicUsize,
}
impl StaticSources {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_notes(mut self, records: Vec<SourceRecord>) -> Self {
		self.notes = Canned::Records(records);

		self
	}

	pub fn with_follow_ups(mut self, records: Vec<SourceRecord>) -> Self {
		self.follow_ups = Canned::Records(records);

		self
	}

	pub fn with_activities(mut self, records: Vec<SourceRecord>) -> Self {
		self.activities = Canned::Records(records);

		self
	}

	pub fn failing_notes(mut self, message: &str) -> Self {
		self.notes = Canned::Failure(message.to_string());

		self
	}

	pub fn failing_follow_ups(mut self, message: &str) -> Self {
		self.follow_ups = Canned::Failure(message.to_string());

		self
	}

	pub fn failing_activities(mut self, message: &str) -> Self {
		self.activities = Canned::Failure(message.to_string());

		self
	}

	/// Makes every fetch wait until all three fetches are in flight, so a sequential collector
	/// never completes.
	pub fn rendezvous(mut self) -> Self {
		self.rendezvous = Some(Arc::new(Barrier::new(3)));

		self
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	fn serve(&self, canned: &Canned) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		let canned = canned.clone();
		let rendezvous = self.rendezvous.clone();

		Box::pin(async move {
			if let Some(barrier) = rendezvous {
				barrier.wait().await;
			}

			match canned {
				Canned::Records(records) => Ok(records),
				Canned::Failure(message) => Err(eyre::eyre!(message)),
			}
		})
	}
}
impl ActivitySources for StaticSources {
	fn fetch_notes(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.serve(&self.notes)
	}

	fn fetch_follow_ups(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.serve(&self.follow_ups)
	}

	fn fetch_activities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.serve(&self.activities)
	}
}
