pub mod snapshot;

use std::{path::PathBuf, sync::Arc};

use clap::{
	Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::EnvFilter;

use crate::snapshot::SnapshotSources;
use rapport_domain::{ProfileFilter, ProfileView, Viewer};
use rapport_service::{RapportService, RelationshipReport};

#[derive(Debug, Parser)]
#[command(
	version,
	about = "Print relationship profiles for a CRM snapshot.",
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Directory holding contacts.json, notes.json, follow_ups.json, and activities.json.
	#[arg(long, short = 'd', value_name = "DIR")]
	pub data: PathBuf,
	/// Email of the team member viewing the report.
	#[arg(long, value_name = "EMAIL")]
	pub viewer: Option<String>,
	#[arg(long, value_enum, default_value_t = ViewArg::All)]
	pub view: ViewArg,
	#[arg(long, value_name = "TERM")]
	pub search: Option<String>,
	/// Evaluate day counts as of this RFC 3339 timestamp instead of now.
	#[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
	pub as_of: Option<OffsetDateTime>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ViewArg {
	All,
	Strong,
	AtRisk,
	Mine,
}
impl From<ViewArg> for ProfileView {
	fn from(value: ViewArg) -> Self {
		match value {
			ViewArg::All => Self::All,
			ViewArg::Strong => Self::Strong,
			ViewArg::AtRisk => Self::AtRisk,
			ViewArg::Mine => Self::Mine,
		}
	}
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = rapport_config::load(&args.config)?;

	init_tracing(&config);

	let viewer = args.viewer.map(Viewer::new).unwrap_or_default();
	let filter = ProfileFilter { view: args.view.into(), search: args.search };
	let now = args.as_of.unwrap_or_else(OffsetDateTime::now_utc);
	let sources = SnapshotSources::new(args.data);
	let report = build_report(config, sources, &viewer, &filter, now).await?;

	println!("{}", serde_json::to_string_pretty(&report)?);

	Ok(())
}

/// Loads contacts from `sources` and derives the report. A missing contacts file is fatal;
/// missing activity files only drop those records.
pub async fn build_report(
	config: rapport_config::Config,
	sources: SnapshotSources,
	viewer: &Viewer,
	filter: &ProfileFilter,
	now: OffsetDateTime,
) -> color_eyre::Result<RelationshipReport> {
	let contacts = sources.load_contacts().await?;
	let service = RapportService::new(config, Arc::new(sources))?;

	tracing::info!(
		contacts = contacts.len(),
		viewer = viewer.email().unwrap_or("anonymous"),
		view = filter.view.as_str(),
		"Building relationship report."
	);

	Ok(service.report_filtered(&contacts, viewer, filter, now).await)
}

fn init_tracing(config: &rapport_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, String> {
	OffsetDateTime::parse(raw, &Rfc3339).map_err(|err| format!("Invalid RFC 3339 timestamp: {err}"))
}
