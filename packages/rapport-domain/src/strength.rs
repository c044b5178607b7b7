use rapport_config::RelationshipWeights;

use crate::contact::EngagementCounters;

/// Scores how warm a contact relationship is, from 0 to 100.
///
/// Sums three independently capped terms, so the result stays in range without a final clamp
/// on well-formed weights. Recency decays linearly per day since the last contact; a negative
/// day count earns the full recency cap.
pub fn relationship_strength(
	days_since_last_contact: i64,
	counters: &EngagementCounters,
	weights: &RelationshipWeights,
) -> u8 {
	let days = days_since_last_contact.max(0) as f64;
	let recency = (weights.recency_max - weights.recency_decay_per_day * days)
		.max(0.0)
		.min(weights.recency_max);
	let frequency = (weights.email_open_weight * f64::from(counters.email_opens)
		+ weights.meeting_weight * f64::from(counters.meetings)
		+ weights.reply_weight * f64::from(counters.email_replies)
		+ weights.note_weight * f64::from(counters.notes))
	.max(0.0)
	.min(weights.frequency_cap);
	let engagement = (weights.engagement_reply_weight * f64::from(counters.email_replies)
		+ weights.engagement_meeting_weight * f64::from(counters.meetings))
	.max(0.0)
	.min(weights.engagement_cap);

	to_score(recency + frequency + engagement)
}

pub(crate) fn to_score(raw: f64) -> u8 {
	if !raw.is_finite() {
		return 0;
	}

	raw.round().max(0.0).min(100.0) as u8
}

#[cfg(test)]
mod tests {
	use rapport_config::RelationshipWeights;

	use crate::{contact::EngagementCounters, strength::relationship_strength};

	#[test]
	fn recency_decays_half_a_point_per_day() {
		let weights = RelationshipWeights::default();
		let none = EngagementCounters::default();

		assert_eq!(relationship_strength(0, &none, &weights), 40);
		assert_eq!(relationship_strength(20, &none, &weights), 30);
		assert_eq!(relationship_strength(79, &none, &weights), 1);
		assert_eq!(relationship_strength(80, &none, &weights), 0);
	}

	#[test]
	fn half_points_round_up() {
		let weights = RelationshipWeights::default();
		let none = EngagementCounters::default();

		// 40 - 0.5 * 3 = 38.5
		assert_eq!(relationship_strength(3, &none, &weights), 39);
	}

	#[test]
	fn negative_days_never_exceed_the_recency_cap() {
		let weights = RelationshipWeights::default();
		let none = EngagementCounters::default();

		assert_eq!(relationship_strength(-10, &none, &weights), 40);
	}
}
