mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, ConnectionWeights, RelationshipWeights, Scoring, Service, TeamMember, Thresholds,
};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } =>
			Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

/// Parses, normalizes, and validates a config held in memory.
pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.roster.is_empty() {
		return Err(Error::Validation { message: "roster must be non-empty.".to_string() });
	}

	let mut seen = HashSet::new();

	for member in &cfg.roster {
		if member.name.is_empty() {
			return Err(Error::Validation {
				message: "roster.name must be non-empty.".to_string(),
			});
		}
		if member.email.is_empty() {
			return Err(Error::Validation {
				message: format!("roster.email must be non-empty for {}.", member.name),
			});
		}
		if !seen.insert(member.email.as_str()) {
			return Err(Error::Validation {
				message: format!("roster.email {} is listed more than once.", member.email),
			});
		}
	}

	let relationship = &cfg.scoring.relationship;

	for (label, weight) in [
		("recency_max", relationship.recency_max),
		("recency_decay_per_day", relationship.recency_decay_per_day),
		("email_open_weight", relationship.email_open_weight),
		("meeting_weight", relationship.meeting_weight),
		("reply_weight", relationship.reply_weight),
		("note_weight", relationship.note_weight),
		("frequency_cap", relationship.frequency_cap),
		("engagement_reply_weight", relationship.engagement_reply_weight),
		("engagement_meeting_weight", relationship.engagement_meeting_weight),
		("engagement_cap", relationship.engagement_cap),
	] {
		check_weight(&format!("scoring.relationship.{label}"), weight)?;
	}

	if relationship.recency_max + relationship.frequency_cap + relationship.engagement_cap > 100.0
	{
		return Err(Error::Validation {
			message: "scoring.relationship caps (recency_max + frequency_cap + engagement_cap) must not exceed 100."
				.to_string(),
		});
	}

	let connection = &cfg.scoring.connection;

	check_weight("scoring.connection.interaction_weight", connection.interaction_weight)?;

	if connection.recency_window_days < 0 {
		return Err(Error::Validation {
			message: "scoring.connection.recency_window_days must be zero or greater.".to_string(),
		});
	}
	if connection.missing_date_days < 0 {
		return Err(Error::Validation {
			message: "scoring.connection.missing_date_days must be zero or greater.".to_string(),
		});
	}
	if cfg.thresholds.strong_min_strength > 100 {
		return Err(Error::Validation {
			message: "thresholds.strong_min_strength must be 100 or less.".to_string(),
		});
	}
	if cfg.thresholds.at_risk_after_days < 0 {
		return Err(Error::Validation {
			message: "thresholds.at_risk_after_days must be zero or greater.".to_string(),
		});
	}

	Ok(())
}

fn check_weight(label: &str, weight: f64) -> Result<()> {
	if !weight.is_finite() {
		return Err(Error::Validation { message: format!("{label} must be a finite number.") });
	}
	if weight < 0.0 {
		return Err(Error::Validation { message: format!("{label} must be zero or greater.") });
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}

	for member in &mut cfg.roster {
		member.name = member.name.trim().to_string();
		member.email = member.email.trim().to_string();
	}
}
