use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use log::warn;
use reqwest::blocking::{multipart, Client};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::scorecard::{
    HoleRecord, PlayerRecord, RoundRecord, NOT_RECORDED, PUTTS_NOT_RECORDED,
};

/// Hints forwarded to the extraction service alongside the photo.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionOptions {
    pub name_format: NameFormat,
    pub read_putts: bool,
    pub read_fairways: bool,
    pub read_greens: bool,
    /// Stable ids of custom fields the service should look for on the card.
    pub custom_fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameFormat {
    #[default]
    FirstName,
    Initials,
    FullName,
}

/// One extracted hole. Fields the service could not read arrive as their
/// documented defaults rather than being absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedHole {
    pub hole: u8,
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default = "putts_default")]
    pub putts: i32,
    #[serde(default = "not_recorded")]
    pub fairway: String,
    #[serde(default = "not_recorded")]
    pub greens: String,
    /// Whatever custom fields were requested, keyed by field id.
    #[serde(flatten)]
    pub custom: HashMap<String, String>,
}

fn not_recorded() -> String {
    NOT_RECORDED.to_string()
}

const fn putts_default() -> i32 {
    PUTTS_NOT_RECORDED
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedPlayer {
    pub name: String,
    #[serde(default)]
    pub total_score: i32,
    pub stats: Vec<ExtractedHole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedRound {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub date: String,
    pub players: Vec<ExtractedPlayer>,
    #[serde(default = "totals_match_default")]
    pub totals_match_card: bool,
    #[serde(default)]
    pub validation_notes: Vec<String>,
}

const fn totals_match_default() -> bool {
    true
}

impl ExtractedRound {
    pub fn into_round(self, id: String) -> RoundRecord {
        if !self.totals_match_card {
            warn!(
                "round {id}: card totals disagree with recomputed sums: {:?}",
                self.validation_notes
            );
        }
        RoundRecord {
            id,
            timestamp: parse_card_date(&self.date),
            course_name: self.course_name,
            players: self.players.into_iter().map(ExtractedPlayer::into_player).collect(),
            selected_player: None,
        }
    }
}

impl ExtractedPlayer {
    fn into_player(self) -> PlayerRecord {
        PlayerRecord {
            name: self.name,
            total_score: self.total_score,
            holes: self
                .stats
                .into_iter()
                .map(|hole| HoleRecord {
                    hole_number: hole.hole,
                    par: hole.par,
                    score: hole.score,
                    putts: hole.putts,
                    fairway: hole.fairway,
                    greens: hole.greens,
                    custom: hole.custom,
                })
                .collect(),
        }
    }
}

/// Cards carry dates in whatever format the course prints. Try the usual
/// ones; an unreadable date leaves the round undated, which every filter
/// keeps.
fn parse_card_date(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(NOT_RECORDED) {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Local));
    }
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%d %b %Y"];
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&date.and_time(NaiveTime::MIN))
                .earliest();
        }
    }
    warn!("unreadable card date: {raw:?}");
    None
}

/// Blocking client for the OCR extraction service.
pub struct ExtractionClient {
    base_url: String,
    client: Client,
}

impl ExtractionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Uploads one scorecard photo and returns the structured card.
    pub fn extract(
        &self,
        image: Vec<u8>,
        file_name: &str,
        options: &ExtractionOptions,
    ) -> Result<ExtractedRound, Error> {
        let form = multipart::Form::new()
            .part(
                "image",
                multipart::Part::bytes(image).file_name(file_name.to_string()),
            )
            .text("options", serde_json::to_string(options)?);
        let response = self
            .client
            .post(format!("{}/ocr", self.base_url))
            .multipart(form)
            .send()?;
        if !response.status().is_success() {
            return Err(Error::ExtractionFailed(response.status().as_u16()));
        }
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod test {
    use super::{parse_card_date, ExtractedRound};
    use chrono::Datelike;

    #[test]
    fn service_payload_round_trips_into_a_round() {
        let payload = r#"{
            "course_name": "Lakeside",
            "date": "2024-06-15",
            "players": [{
                "name": "Alex",
                "total_score": 85,
                "stats": [
                    {"hole": 1, "par": 4, "score": 5, "putts": 2, "fairway": "✓", "greens": "✗"},
                    {"hole": 2, "score": 4}
                ]
            }],
            "totals_match_card": true,
            "validation_notes": []
        }"#;
        let extracted: ExtractedRound = serde_json::from_str(payload).unwrap();
        let round = extracted.into_round("round-1".to_string());
        assert_eq!(round.course_name, "Lakeside");
        assert_eq!(round.timestamp.unwrap().year(), 2024);

        let holes = &round.players[0].holes;
        assert_eq!(holes[0].fairway, "✓");
        // Unread optional fields arrive as their documented defaults.
        assert_eq!(holes[1].putts, -1);
        assert_eq!(holes[1].fairway, "N/A");
        assert_eq!(holes[1].greens, "N/A");
        assert_eq!(holes[1].par, None);
    }

    #[test]
    fn custom_columns_land_in_the_custom_map() {
        let payload = r#"{
            "players": [{
                "name": "Alex",
                "stats": [{"hole": 1, "score": 4, "sand-save": "Yes"}]
            }]
        }"#;
        let extracted: ExtractedRound = serde_json::from_str(payload).unwrap();
        let round = extracted.into_round("round-2".to_string());
        assert_eq!(round.players[0].holes[0].custom["sand-save"], "Yes");
    }

    #[test]
    fn common_card_date_formats_parse() {
        for raw in ["2024-06-15", "06/15/2024", "Jun 15, 2024", "15 Jun 2024"] {
            let parsed = parse_card_date(raw).unwrap();
            assert_eq!(
                (parsed.year(), parsed.month(), parsed.day()),
                (2024, 6, 15),
                "failed for {raw}"
            );
        }
    }

    #[test]
    fn unreadable_dates_leave_the_round_undated() {
        for raw in ["", "N/A", "sometime in June", "15/06/2024x"] {
            assert!(parse_card_date(raw).is_none(), "parsed {raw:?}");
        }
    }
}
