use std::time::Duration;

use rapport_domain::ActivityKind;
use rapport_service::collect_activities;
use rapport_testkit::{StaticSources, source_record};

fn kinds(collection: &rapport_service::Collection) -> Vec<ActivityKind> {
	collection.records.iter().map(|record| record.kind).collect()
}

#[tokio::test]
async fn merges_and_tags_all_three_collections_in_order() {
	let sources = StaticSources::new()
		.with_notes(vec![source_record("Dana", "avery@firm.example", 1)])
		.with_follow_ups(vec![
			source_record("Dana", "jordan@firm.example", 2),
			source_record("Morgan", "jordan@firm.example", 3),
		])
		.with_activities(vec![source_record("Casey", "sam@firm.example", 4)]);
	let collection = collect_activities(&sources).await;

	assert_eq!(
		kinds(&collection),
		[ActivityKind::Note, ActivityKind::FollowUp, ActivityKind::FollowUp, ActivityKind::Activity]
	);
	assert_eq!(collection.records[2].contact_name.as_deref(), Some("Morgan"));
	assert!(collection.failed.is_empty());
	assert_eq!(sources.calls(), 3);
}

#[tokio::test]
async fn one_failed_collection_keeps_the_others() {
	let sources = StaticSources::new()
		.with_notes(vec![source_record("Dana", "avery@firm.example", 1)])
		.failing_follow_ups("connection reset")
		.with_activities(vec![source_record("Casey", "sam@firm.example", 4)]);
	let collection = collect_activities(&sources).await;

	assert_eq!(kinds(&collection), [ActivityKind::Note, ActivityKind::Activity]);
	assert_eq!(collection.failed, [ActivityKind::FollowUp]);
}

#[tokio::test]
async fn all_collections_failing_yields_an_empty_stream() {
	let sources = StaticSources::new()
		.failing_notes("timeout")
		.failing_follow_ups("timeout")
		.failing_activities("timeout");
	let collection = collect_activities(&sources).await;

	assert!(collection.records.is_empty());
	assert_eq!(
		collection.failed,
		[ActivityKind::Note, ActivityKind::FollowUp, ActivityKind::Activity]
	);
}

#[tokio::test]
async fn fetches_run_concurrently() {
	let sources = StaticSources::new()
		.with_notes(vec![source_record("Dana", "avery@firm.example", 1)])
		.rendezvous();
	let collection =
		tokio::time::timeout(Duration::from_secs(5), collect_activities(&sources))
			.await
			.expect("Fetches must be in flight together.");

	assert_eq!(collection.records.len(), 1);
}
