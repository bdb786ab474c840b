use chrono::{Datelike, NaiveDate};

use crate::scorecard::RoundRecord;

/// Which slice of round history feeds an aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    All,
    /// Local calendar year.
    Year(i32),
    /// Inclusive at both ends, whole local days.
    Range { start: NaiveDate, end: NaiveDate },
}

impl DateFilter {
    /// Rounds without a usable timestamp stay in rather than silently
    /// vanishing from every dated view.
    pub fn includes(&self, round: &RoundRecord) -> bool {
        let Some(timestamp) = round.timestamp else {
            return true;
        };
        match self {
            DateFilter::All => true,
            DateFilter::Year(year) => timestamp.year() == *year,
            DateFilter::Range { start, end } => {
                let day = timestamp.date_naive();
                *start <= day && day <= *end
            }
        }
    }
}

pub fn filter_rounds<'h>(history: &'h [RoundRecord], filter: &DateFilter) -> Vec<&'h RoundRecord> {
    history
        .iter()
        .filter(|round| filter.includes(round))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{filter_rounds, DateFilter};
    use crate::scorecard::RoundRecord;
    use chrono::{Local, NaiveDate, TimeZone};

    fn round_at(id: &str, year: i32, month: u32, day: u32) -> RoundRecord {
        round_at_time(id, year, month, day, 12, 0, 0, 0)
    }

    #[allow(clippy::too_many_arguments)]
    fn round_at_time(
        id: &str,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
        milli: u32,
    ) -> RoundRecord {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_milli_opt(hour, min, sec, milli)
            .unwrap();
        RoundRecord {
            id: id.to_string(),
            timestamp: Local.from_local_datetime(&naive).earliest(),
            course_name: String::new(),
            players: vec![],
            selected_player: None,
        }
    }

    fn undated(id: &str) -> RoundRecord {
        RoundRecord {
            id: id.to_string(),
            timestamp: None,
            course_name: String::new(),
            players: vec![],
            selected_player: None,
        }
    }

    #[test]
    fn year_filter_matches_local_calendar_year() {
        let history = vec![
            round_at("a", 2023, 12, 31),
            round_at("b", 2024, 1, 1),
            round_at("c", 2024, 6, 15),
        ];
        let included = filter_rounds(&history, &DateFilter::Year(2024));
        let ids: Vec<&str> = included.iter().map(|round| round.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn range_is_inclusive_at_both_ends() {
        let filter = DateFilter::Range {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        };
        let at_start = round_at_time("start", 2024, 3, 1, 0, 0, 0, 0);
        let last_instant = round_at_time("end", 2024, 3, 31, 23, 59, 59, 999);
        let after = round_at_time("after", 2024, 4, 1, 0, 0, 0, 0);
        assert!(filter.includes(&at_start));
        assert!(filter.includes(&last_instant));
        assert!(!filter.includes(&after));
    }

    #[test]
    fn undated_rounds_are_kept_by_every_filter() {
        let round = undated("mystery");
        assert!(DateFilter::All.includes(&round));
        assert!(DateFilter::Year(1999).includes(&round));
        assert!(DateFilter::Range {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }
        .includes(&round));
    }
}
