use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use rapport_domain::{ActivityKind, ProfileFilter, ProfileView, Viewer};
use rapport_report::{build_report, snapshot::SnapshotSources};
use rapport_testkit::{NOW, config};

const CONTACTS: &str = r#"[
	{
		"id": "c-1",
		"name": "Dana Whitfield",
		"company": "Whitfield Family Office",
		"status": "qualified",
		"created_at": "2026-01-10T09:00:00Z",
		"last_contact_at": "2026-05-04T09:00:00Z",
		"email_opens": 5,
		"email_replies": 1,
		"meetings": 2,
		"notes": 3,
		"pipeline_value": 1500000.0,
		"owner": "Avery Quinn",
		"approval": "approved"
	},
	{
		"id": "c-2",
		"name": "Riley Stone",
		"status": "lead",
		"created_at": "2026-04-01T09:00:00Z",
		"approval": "rejected"
	},
	{
		"id": "c-3",
		"name": "Morgan Lee",
		"status": "contacted",
		"created_at": "2026-02-01T09:00:00Z",
		"last_contact_at": ""
	}
]"#;

const NOTES: &str = r#"[
	{ "contact_name": "Dana Whitfield", "author_email": "jordan@firm.example", "created_at": "2026-04-24T15:00:00Z", "body": "Intro call." },
	{ "contact_name": "Riley Stone", "author_email": "avery@firm.example", "created_at": "2026-05-01T15:00:00Z" }
]"#;

const FOLLOW_UPS: &str = r#"[
	{ "contact_name": "Dana", "author_email": "jordan@firm.example", "created_at": "2026-04-14T15:00:00Z", "due_date": "2026-05-20" }
]"#;

fn snapshot_dir(files: &[(&str, &str)]) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be after the Unix epoch.")
		.as_nanos();
	let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
	let dir = env::temp_dir().join(format!("rapport_snapshot_{nanos}_{seq}"));

	fs::create_dir_all(&dir).expect("Failed to create snapshot dir.");

	for (name, payload) in files {
		fs::write(dir.join(name), payload).expect("Failed to write snapshot file.");
	}

	dir
}

#[tokio::test]
async fn builds_a_report_from_snapshot_files() {
	let dir = snapshot_dir(&[
		("contacts.json", CONTACTS),
		("notes.json", NOTES),
		("follow_ups.json", FOLLOW_UPS),
		("activities.json", "[]"),
	]);
	let report = build_report(
		config(),
		SnapshotSources::new(&dir),
		&Viewer::new("jordan@firm.example"),
		&ProfileFilter::default(),
		NOW,
	)
	.await
	.expect("Report must build.");

	fs::remove_dir_all(&dir).expect("Failed to remove snapshot dir.");

	let ids = report.profiles.iter().map(|profile| profile.contact_id.as_str()).collect::<Vec<_>>();

	assert_eq!(ids, ["c-1", "c-3"]);
	assert_eq!(report.profiles[0].strength, 90);
	assert_eq!(report.profiles[0].connections[0].strength, 60);
	assert_eq!(report.profiles[0].my_connections.len(), 1);
	assert!(report.profiles[1].at_risk);
	assert!(report.failed_sources.is_empty());
}

#[tokio::test]
async fn missing_activity_file_is_a_partial_failure() {
	let dir = snapshot_dir(&[
		("contacts.json", CONTACTS),
		("notes.json", NOTES),
		("activities.json", "[]"),
	]);
	let report = build_report(
		config(),
		SnapshotSources::new(&dir),
		&Viewer::anonymous(),
		&ProfileFilter { view: ProfileView::All, search: Some("dana".to_string()) },
		NOW,
	)
	.await
	.expect("Report must build without follow-ups.");

	fs::remove_dir_all(&dir).expect("Failed to remove snapshot dir.");

	assert_eq!(report.failed_sources, [ActivityKind::FollowUp]);
	assert_eq!(report.profiles.len(), 1);
	assert_eq!(report.profiles[0].connections[0].interaction_count, 1);
	assert_eq!(report.stats.total, 2);
}

#[tokio::test]
async fn missing_contacts_file_is_fatal() {
	let dir = snapshot_dir(&[("notes.json", NOTES)]);
	let result = build_report(
		config(),
		SnapshotSources::new(&dir),
		&Viewer::anonymous(),
		&ProfileFilter::default(),
		NOW,
	)
	.await;

	fs::remove_dir_all(&dir).expect("Failed to remove snapshot dir.");

	assert!(result.is_err());
}
