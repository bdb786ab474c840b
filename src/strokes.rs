use serde::Serialize;

use crate::scorecard::PlayerRecord;

// Placeholder coefficients; a real strokes-gained model needs shot-level
// data no photographed card carries.
const PUTTING_BASELINE: f64 = 2.0;
const PUTTING_WEIGHT: f64 = 0.1;
const OFF_TEE_WEIGHT: f64 = 0.05;
const APPROACH_WEIGHT: f64 = 0.03;
const AROUND_GREEN_WEIGHT: f64 = 0.02;

const OFF_TEE_HOLES: usize = 4;
const APPROACH_HOLES: usize = 10;

/// Rough strokes-gained split for one round, attributed by card position.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StrokesBreakdown {
    pub off_tee: f64,
    pub approach: f64,
    pub around_green: f64,
    pub putting: f64,
    pub total: f64,
    pub per_hole: Vec<HoleToPar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoleToPar {
    pub hole_number: u8,
    pub score: i32,
    pub par: i32,
    pub to_par: i32,
}

/// Splits a round into coarse strokes-gained buckets. Holes without a
/// recorded score contribute nothing; putts follow the usual `putts > 0`
/// rule.
pub fn strokes_gained(player: &PlayerRecord) -> StrokesBreakdown {
    let mut breakdown = StrokesBreakdown::default();
    let mut total_putts = 0;

    for (index, hole) in player.holes.iter().enumerate() {
        if let Some(putts) = hole.counted_putts() {
            total_putts += putts;
        }
        let Some(score) = hole.counted_score() else {
            continue;
        };
        let par = hole.resolved_par();
        let to_par = score - par;
        breakdown.per_hole.push(HoleToPar {
            hole_number: hole.hole_number,
            score,
            par,
            to_par,
        });
        let to_par = f64::from(to_par);
        if index < OFF_TEE_HOLES {
            breakdown.off_tee -= OFF_TEE_WEIGHT * to_par;
        } else if index < APPROACH_HOLES {
            breakdown.approach -= APPROACH_WEIGHT * to_par;
        } else {
            breakdown.around_green -= AROUND_GREEN_WEIGHT * to_par;
        }
    }

    breakdown.putting =
        (PUTTING_BASELINE - PUTTING_WEIGHT * f64::from(total_putts)).max(0.0);
    breakdown.total =
        breakdown.off_tee + breakdown.approach + breakdown.around_green + breakdown.putting;
    breakdown
}
