mod classify;
mod error;
mod extract;
mod filter;
mod scorecard;
mod stats;
mod store;
mod strokes;
mod summary;
mod tendency;

pub use classify::{classify, CategoryLists, Mark};
pub use error::Error;
pub use extract::{
    ExtractedHole, ExtractedPlayer, ExtractedRound, ExtractionClient, ExtractionOptions,
    NameFormat,
};
pub use filter::{filter_rounds, DateFilter};
pub use scorecard::{
    CustomFieldDef, FairwayMarks, GreenMarks, HoleRecord, MarkingConfig, PlayerRecord,
    RoundRecord, SelectedPlayer, StatType, DEFAULT_PAR, NOT_RECORDED, PUTTS_NOT_RECORDED,
};
pub use stats::{
    aggregate, compute, AggregateStats, DonutStat, StatsSnapshot, PLACEHOLDER_COURSE_RATING,
    PLACEHOLDER_SLOPE,
};
pub use store::{InMemoryStore, RoundStore, HISTORY_CAP};
pub use strokes::{strokes_gained, HoleToPar, StrokesBreakdown};
pub use summary::{summarize_player, summarize_round, RoundSummary};
pub use tendency::{miss_tendency, Bias, TendencyReport};
