use std::collections::HashMap;

use chrono::{DateTime, Local};
use log::debug;
use serde::Serialize;

use crate::classify::Mark;
use crate::scorecard::{MarkingConfig, PlayerRecord, RoundRecord, NOT_RECORDED};

const FRONT_NINE: usize = 9;

/// Everything the aggregator needs from one round. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoundSummary {
    pub round_id: String,
    pub timestamp: Option<DateTime<Local>>,
    pub front_score: i32,
    pub back_score: i32,
    pub total_score: i32,
    pub holes_played: u32,
    pub front_putts: i32,
    pub back_putts: i32,
    pub total_putts: i32,
    pub fairway_opportunities: u32,
    pub fairway_hits: u32,
    pub fairway_missed_left: u32,
    pub fairway_missed_right: u32,
    pub green_opportunities: u32,
    pub green_hits: u32,
    /// field id -> raw value -> occurrences
    pub custom_tally: HashMap<String, HashMap<String, u32>>,
}

impl RoundSummary {
    /// Whether this round recorded any per-hole detail. Rounds without any
    /// are left out of rate denominators so they cannot dilute percentages.
    pub fn has_detail(&self) -> bool {
        self.total_putts > 0 || self.fairway_opportunities > 0 || self.green_opportunities > 0
    }
}

/// Summarizes the round's statistics player. Returns None for a round with
/// no players at all.
pub fn summarize_round(round: &RoundRecord, config: &MarkingConfig) -> Option<RoundSummary> {
    let player = round.stats_player()?;
    Some(summarize_player(
        player,
        config,
        round.id.clone(),
        round.timestamp,
    ))
}

/// Turns one player's raw hole array into a typed summary. Holes are split
/// positionally into front (0..9) and back (9..); short or overlong cards
/// are summed as-is.
pub fn summarize_player(
    player: &PlayerRecord,
    config: &MarkingConfig,
    round_id: String,
    timestamp: Option<DateTime<Local>>,
) -> RoundSummary {
    let mut summary = RoundSummary {
        round_id,
        timestamp,
        ..Default::default()
    };

    for (index, hole) in player.holes.iter().enumerate() {
        let front = index < FRONT_NINE;
        if let Some(score) = hole.counted_score() {
            if front {
                summary.front_score += score;
            } else {
                summary.back_score += score;
            }
            summary.holes_played += 1;
        }
        if let Some(putts) = hole.counted_putts() {
            if front {
                summary.front_putts += putts;
            } else {
                summary.back_putts += putts;
            }
        }

        // Par 3s offer no fairway to hit.
        if hole.resolved_par() != 3 {
            match config.fairway.classify(Some(hole.fairway.as_str())) {
                Mark::Hit => {
                    summary.fairway_opportunities += 1;
                    summary.fairway_hits += 1;
                }
                Mark::MissedLeft => {
                    summary.fairway_opportunities += 1;
                    summary.fairway_missed_left += 1;
                }
                Mark::MissedRight => {
                    summary.fairway_opportunities += 1;
                    summary.fairway_missed_right += 1;
                }
                Mark::Missed => summary.fairway_opportunities += 1,
                Mark::Unknown => {
                    debug!(
                        "round {}: fairway mark {:?} matches no configured list",
                        summary.round_id, hole.fairway
                    );
                    summary.fairway_opportunities += 1;
                }
                Mark::NotRecorded => {}
            }
        }

        match config.greens.classify(Some(hole.greens.as_str())) {
            Mark::Hit => {
                summary.green_opportunities += 1;
                summary.green_hits += 1;
            }
            Mark::NotRecorded => {}
            Mark::Unknown => {
                debug!(
                    "round {}: green mark {:?} matches no configured list",
                    summary.round_id, hole.greens
                );
                summary.green_opportunities += 1;
            }
            _ => summary.green_opportunities += 1,
        }

        for field in config.enabled_custom_fields() {
            let Some(value) = hole.custom.get(&field.id) else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() || value.eq_ignore_ascii_case(NOT_RECORDED) {
                continue;
            }
            *summary
                .custom_tally
                .entry(field.id.clone())
                .or_default()
                .entry(value.to_string())
                .or_default() += 1;
        }
    }

    summary.total_score = summary.front_score + summary.back_score;
    summary.total_putts = summary.front_putts + summary.back_putts;
    summary
}
