use std::collections::HashMap;
use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;
use serde::Serialize;

use crate::filter::{filter_rounds, DateFilter};
use crate::scorecard::{CustomFieldDef, MarkingConfig, RoundRecord, StatType};
use crate::summary::{summarize_round, RoundSummary};

/// Placeholder course data for the handicap estimate. A photographed card
/// carries no rating/slope, so every round is treated as a par-72 course of
/// standard slope.
pub const PLACEHOLDER_COURSE_RATING: f64 = 72.0;
pub const PLACEHOLDER_SLOPE: f64 = 113.0;

const STANDARD_SLOPE: f64 = 113.0;
const BEST_ROUNDS_WINDOW: usize = 8;
const HANDICAP_FACTOR: f64 = 0.96;

/// Merged distribution and headline number for one custom field.
#[derive(Debug, Clone, Serialize)]
pub struct DonutStat {
    pub label: String,
    pub stat_type: StatType,
    pub value: f64,
    /// Heaviest slice first, ties broken by value string.
    pub slices: Vec<(String, u32)>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateStats {
    /// None when no round has a positive total score; renders as "N/A".
    pub avg_score: Option<f64>,
    pub best_scores_count: usize,
    pub usga_handicap_estimate: Option<f64>,
    pub fairway_pct: f64,
    pub fairway_missed_left_pct: f64,
    pub fairway_missed_right_pct: f64,
    pub greens_pct: f64,
    pub putts_per_hole: f64,
    pub total_rounds: usize,
    pub custom_donut_stats: HashMap<String, DonutStat>,
}

/// Full recomputation pass: filter, normalize, aggregate. Runs start to
/// finish on every history, configuration or filter change; best-N selection
/// does not decompose into running sums once rounds can be deleted.
pub fn compute(
    history: &[RoundRecord],
    config: &MarkingConfig,
    filter: &DateFilter,
) -> StatsSnapshot {
    let summaries = filter_rounds(history, filter)
        .into_iter()
        .filter_map(|round| summarize_round(round, config))
        .collect_vec();
    let stats = aggregate(&summaries, &config.custom_fields);
    StatsSnapshot { summaries, stats }
}

/// The per-round summaries and the multi-round statistics of one pass,
/// handed as a unit to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub summaries: Vec<RoundSummary>,
    pub stats: AggregateStats,
}

pub fn aggregate(summaries: &[RoundSummary], custom_fields: &[CustomFieldDef]) -> AggregateStats {
    let best = best_scores(summaries);
    let avg_score = (!best.is_empty())
        .then(|| best.iter().sum::<i32>() as f64 / best.len() as f64);

    let mut stats = AggregateStats {
        avg_score,
        best_scores_count: best.len(),
        usga_handicap_estimate: handicap_estimate(summaries),
        total_rounds: summaries.len(),
        ..Default::default()
    };

    // Only rounds with some recorded per-hole detail enter the rate sums.
    let detailed = summaries
        .iter()
        .filter(|summary| summary.has_detail())
        .collect_vec();
    let fairway_opps: u32 = detailed.iter().map(|s| s.fairway_opportunities).sum();
    let green_opps: u32 = detailed.iter().map(|s| s.green_opportunities).sum();
    let holes_played: u32 = detailed.iter().map(|s| s.holes_played).sum();
    let total_putts: i32 = detailed.iter().map(|s| s.total_putts).sum();

    stats.fairway_pct = pct(detailed.iter().map(|s| s.fairway_hits).sum(), fairway_opps);
    stats.fairway_missed_left_pct =
        pct(detailed.iter().map(|s| s.fairway_missed_left).sum(), fairway_opps);
    stats.fairway_missed_right_pct =
        pct(detailed.iter().map(|s| s.fairway_missed_right).sum(), fairway_opps);
    stats.greens_pct = pct(detailed.iter().map(|s| s.green_hits).sum(), green_opps);
    stats.putts_per_hole = if holes_played == 0 {
        0.0
    } else {
        total_putts as f64 / holes_played as f64
    };

    for field in custom_fields
        .iter()
        .filter(|field| field.enabled && field.show_as_donut)
    {
        if let Some(donut) = donut_stat(field, summaries) {
            stats.custom_donut_stats.insert(field.id.clone(), donut);
        }
    }

    stats
}

/// The min(8, N) lowest positive total scores, ascending.
fn best_scores(summaries: &[RoundSummary]) -> Vec<i32> {
    summaries
        .iter()
        .filter_map(|summary| (summary.total_score > 0).then_some(summary.total_score))
        .sorted()
        .take(BEST_ROUNDS_WINDOW)
        .collect_vec()
}

/// Simplified USGA-style estimate: differentials against the placeholder
/// rating/slope, best min(8, N) averaged, times 0.96, one decimal.
fn handicap_estimate(summaries: &[RoundSummary]) -> Option<f64> {
    let differentials = summaries
        .iter()
        .filter(|summary| summary.total_score > 0)
        .map(|summary| {
            (summary.total_score as f64 - PLACEHOLDER_COURSE_RATING) * STANDARD_SLOPE
                / PLACEHOLDER_SLOPE
        })
        .sorted_by(f64::total_cmp)
        .take(BEST_ROUNDS_WINDOW)
        .collect_vec();
    if differentials.is_empty() {
        return None;
    }
    let mean = differentials.iter().sum::<f64>() / differentials.len() as f64;
    Some((mean * HANDICAP_FACTOR * 10.0).round() / 10.0)
}

fn pct(hits: u32, opportunities: u32) -> f64 {
    if opportunities == 0 {
        0.0
    } else {
        hits as f64 / opportunities as f64 * 100.0
    }
}

/// Merges one field's tally across all summaries and reduces it per the
/// field's stat type. None when no data references the field, so stale or
/// unused fields disappear from output instead of reading as zero.
fn donut_stat(field: &CustomFieldDef, summaries: &[RoundSummary]) -> Option<DonutStat> {
    let mut merged: HashMap<String, u32> = HashMap::new();
    for summary in summaries {
        if let Some(tally) = summary.custom_tally.get(&field.id) {
            for (value, count) in tally {
                *merged.entry(value.clone()).or_default() += count;
            }
        }
    }
    let total: u32 = merged.values().sum();
    if total == 0 {
        return None;
    }

    let slices = merged
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect_vec();

    let value = match field.stat_type {
        StatType::SuccessRate => {
            let successes: u32 = slices
                .iter()
                .filter(|(value, _)| field.is_success(value))
                .map(|(_, count)| count)
                .sum();
            successes as f64 / total as f64 * 100.0
        }
        StatType::Percentage => slices
            .first()
            .and_then(|(value, _)| numeric_value(value))
            .map(|value| value.clamp(0.0, 100.0))
            .unwrap_or(0.0),
        StatType::Average => {
            let (weighted_sum, weight) = slices
                .iter()
                .filter_map(|(value, count)| {
                    numeric_value(value).map(|number| (number * f64::from(*count), *count))
                })
                .fold((0.0, 0u32), |(sum, count), (s, c)| (sum + s, count + c));
            if weight == 0 {
                0.0
            } else {
                weighted_sum / f64::from(weight)
            }
        }
        StatType::Count => f64::from(total),
    };

    Some(DonutStat {
        label: field.label.clone(),
        stat_type: field.stat_type,
        value,
        slices,
    })
}

/// First number inside a free-form value, so "85%" and "about 3" both parse.
fn numeric_value(raw: &str) -> Option<f64> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("literal regex"));
    number.find(raw.trim())?.as_str().parse().ok()
}
