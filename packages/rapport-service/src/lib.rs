pub mod collector;

mod error;

pub use collector::{ActivitySources, Collection, collect_activities};
pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

use serde::Serialize;
use time::OffsetDateTime;

use rapport_config::Config;
use rapport_domain::{
	ActivityKind, Contact, ProfileFilter, ProfileStats, RelationshipProfile, Viewer,
	assemble_profiles, profile_stats,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Relationship profiles for one viewer, with statistics over every visible contact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RelationshipReport {
	pub profiles: Vec<RelationshipProfile>,
	pub stats: ProfileStats,
	pub failed_sources: Vec<ActivityKind>,
}

pub struct RapportService {
	pub cfg: Config,
	pub sources: Arc<dyn ActivitySources>,
}
impl RapportService {
	pub fn new(cfg: Config, sources: Arc<dyn ActivitySources>) -> Result<Self> {
		rapport_config::validate(&cfg)?;

		Ok(Self { cfg, sources })
	}

	/// Recomputes every profile from scratch. Nothing is cached between calls.
	pub async fn report(
		&self,
		contacts: &[Contact],
		viewer: &Viewer,
		now: OffsetDateTime,
	) -> RelationshipReport {
		self.report_filtered(contacts, viewer, &ProfileFilter::default(), now).await
	}

	/// Like [`RapportService::report`], but only returns the profiles `filter` selects.
	///
	/// Statistics still cover every visible contact.
	pub async fn report_filtered(
		&self,
		contacts: &[Contact],
		viewer: &Viewer,
		filter: &ProfileFilter,
		now: OffsetDateTime,
	) -> RelationshipReport {
		let collection = collect_activities(self.sources.as_ref()).await;
		let profiles = assemble_profiles(&self.cfg, contacts, &collection.records, viewer, now);
		let stats = profile_stats(&profiles);

		tracing::info!(
			contacts = contacts.len(),
			profiles = stats.total,
			activities = collection.records.len(),
			failed_sources = collection.failed.len(),
			"Relationship profiles assembled."
		);

		RelationshipReport {
			profiles: filter.apply(profiles),
			stats,
			failed_sources: collection.failed,
		}
	}
}
