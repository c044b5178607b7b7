//! JSON snapshot directory standing in for the CRM collections.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{self, WrapErr};
use serde::de::DeserializeOwned;

use rapport_domain::{Contact, SourceRecord};
use rapport_service::{ActivitySources, BoxFuture};

pub const CONTACTS_FILE: &str = "contacts.json";
pub const NOTES_FILE: &str = "notes.json";
pub const FOLLOW_UPS_FILE: &str = "follow_ups.json";
pub const ACTIVITIES_FILE: &str = "activities.json";

pub struct SnapshotSources {
	dir: PathBuf,
}
impl SnapshotSources {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub async fn load_contacts(&self) -> color_eyre::Result<Vec<Contact>> {
		read_json(&self.dir.join(CONTACTS_FILE)).await
	}

	fn fetch(&self, file: &str) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		let path = self.dir.join(file);

		Box::pin(async move { read_json(&path).await })
	}
}
impl ActivitySources for SnapshotSources {
	fn fetch_notes(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.fetch(NOTES_FILE)
	}

	fn fetch_follow_ups(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.fetch(FOLLOW_UPS_FILE)
	}

	fn fetch_activities(&self) -> BoxFuture<'_, color_eyre::Result<Vec<SourceRecord>>> {
		self.fetch(ACTIVITIES_FILE)
	}
}

async fn read_json<T>(path: &Path) -> color_eyre::Result<Vec<T>>
where
	T: DeserializeOwned,
{
	let raw = tokio::fs::read(path)
		.await
		.wrap_err_with(|| format!("Failed to read {}.", path.display()))?;

	if raw.iter().all(u8::is_ascii_whitespace) {
		return Err(eyre::eyre!("{} is empty.", path.display()));
	}

	serde_json::from_slice(&raw).wrap_err_with(|| format!("Failed to parse {}.", path.display()))
}
