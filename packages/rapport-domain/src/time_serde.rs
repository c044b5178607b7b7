//! RFC 3339 timestamps as exchanged with the CRM collections.

pub mod option;

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&value.format(&Rfc3339).map_err(ser::Error::custom)?)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
	D: Deserializer<'de>,
{
	parse(&String::deserialize(deserializer)?)
}

pub(crate) fn parse<E>(raw: &str) -> Result<OffsetDateTime, E>
where
	E: de::Error,
{
	OffsetDateTime::parse(raw.trim(), &Rfc3339)
		.map_err(|err| E::custom(format!("Invalid RFC 3339 timestamp {raw:?}: {err}")))
}
