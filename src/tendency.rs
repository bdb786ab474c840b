use serde::Serialize;

use crate::stats::AggregateStats;
use crate::summary::RoundSummary;

/// Directional bias of fairway misses across the aggregated rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    Left,
    Right,
    Balanced,
}

impl Bias {
    fn of(left: u32, right: u32) -> Self {
        if left > right && left > 0 {
            Bias::Left
        } else if right > left && right > 0 {
            Bias::Right
        } else {
            Bias::Balanced
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TendencyReport {
    pub fairway_bias: Bias,
    pub missed_left: u32,
    pub missed_right: u32,
    pub commentary: Vec<String>,
}

/// Plain-language read of where the tee shots are going, for display under
/// the donut charts.
pub fn miss_tendency(summaries: &[RoundSummary], stats: &AggregateStats) -> TendencyReport {
    let missed_left: u32 = summaries.iter().map(|s| s.fairway_missed_left).sum();
    let missed_right: u32 = summaries.iter().map(|s| s.fairway_missed_right).sum();
    let fairway_bias = Bias::of(missed_left, missed_right);

    let mut commentary = vec![];
    if let Some(avg) = stats.avg_score {
        commentary.push(format!(
            "Average score: {avg:.1}, average putts: {:.1} per hole.",
            stats.putts_per_hole
        ));
    }
    match fairway_bias {
        Bias::Left => commentary.push(
            "Off the tee you tend to miss left. Consider alignment or clubface adjustments."
                .to_string(),
        ),
        Bias::Right => {
            commentary.push("Off the tee you tend to miss right. Check setup and path.".to_string())
        }
        Bias::Balanced => {
            commentary.push("Directional misses look reasonably balanced.".to_string())
        }
    }

    TendencyReport {
        fairway_bias,
        missed_left,
        missed_right,
        commentary,
    }
}
