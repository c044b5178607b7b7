pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to fetch {kind} records: {message}")]
	Source { kind: &'static str, message: String },
	#[error(transparent)]
	Config(#[from] rapport_config::Error),
}
