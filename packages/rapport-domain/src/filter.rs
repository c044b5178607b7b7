use serde::{Deserialize, Serialize};

use crate::profile::RelationshipProfile;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileView {
	#[default]
	All,
	Strong,
	AtRisk,
	Mine,
}
impl ProfileView {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Strong => "strong",
			Self::AtRisk => "at_risk",
			Self::Mine => "mine",
		}
	}
}

/// Narrows an assembled profile list for display.
///
/// `search` is matched case-insensitively against the contact name and company; a blank term
/// matches everything.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProfileFilter {
	#[serde(default)]
	pub view: ProfileView,
	#[serde(default)]
	pub search: Option<String>,
}
impl ProfileFilter {
	pub fn matches(&self, profile: &RelationshipProfile) -> bool {
		let in_view = match self.view {
			ProfileView::All => true,
			ProfileView::Strong => profile.strong,
			ProfileView::AtRisk => profile.at_risk,
			ProfileView::Mine => !profile.my_connections.is_empty(),
		};

		in_view && self.matches_search(profile)
	}

	/// Keeps the relative order of `profiles`.
	pub fn apply(&self, profiles: Vec<RelationshipProfile>) -> Vec<RelationshipProfile> {
		profiles.into_iter().filter(|profile| self.matches(profile)).collect()
	}

	fn matches_search(&self, profile: &RelationshipProfile) -> bool {
		let Some(term) = self.search.as_deref().map(str::trim).filter(|term| !term.is_empty())
		else {
			return true;
		};
		let term = term.to_lowercase();

		profile.name.to_lowercase().contains(&term)
			|| profile.company.to_lowercase().contains(&term)
	}
}
