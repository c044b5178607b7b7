use serde::Serialize;

use crate::{BoxFuture, Error};
use rapport_domain::{ActivityKind, ActivityRecord, SourceRecord};

/// Read access to the three activity collections.
pub trait ActivitySources
where
	Self: Send + Sync,
{
	fn fetch_notes(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>>;

	fn fetch_follow_ups(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>>;

	fn fetch_activities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>>;
}

/// The merged activity stream, in note, follow-up, activity order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Collection {
	pub records: Vec<ActivityRecord>,
	/// Collections that failed to load and were treated as empty.
	pub failed: Vec<ActivityKind>,
}

/// Fetches all three collections concurrently and merges them into one tagged stream.
///
/// A failed fetch is logged and contributes no records; it never fails the collection.
pub async fn collect_activities(sources: &dyn ActivitySources) -> Collection {
	let (notes, follow_ups, activities) =
		tokio::join!(sources.fetch_notes(), sources.fetch_follow_ups(), sources.fetch_activities());
	let mut collection = Collection::default();

	for (kind, fetched) in [
		(ActivityKind::Note, notes),
		(ActivityKind::FollowUp, follow_ups),
		(ActivityKind::Activity, activities),
	] {
		match fetched {
			Ok(records) => {
				tracing::debug!(
					kind = kind.as_str(),
					records = records.len(),
					"Fetched activity records."
				);

				collection
					.records
					.extend(records.into_iter().map(|record| ActivityRecord::tagged(kind, record)));
			},
			Err(err) => {
				let err = Error::Source { kind: kind.as_str(), message: err.to_string() };

				tracing::warn!(
					kind = kind.as_str(),
					error = %err,
					"Activity source failed. Continuing without it."
				);

				collection.failed.push(kind);
			},
		}
	}

	collection
}
