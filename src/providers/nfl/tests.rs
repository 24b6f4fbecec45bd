//! Lookup tests with an in-memory ESPN upstream

use super::*;
use crate::SportsError;
use serde_json::{json, Value};
use std::sync::Mutex;

#[derive(Default)]
struct FakeEspn {
    search: Value,
    detail: Value,
    statistics: Value,
    requested_ids: Mutex<Vec<String>>,
}

#[async_trait]
impl NflApi for FakeEspn {
    async fn search_athletes(&self, _query: &str) -> Result<SearchResponse> {
        Ok(serde_json::from_value(self.search.clone())?)
    }

    async fn athlete(&self, id: &NflAthleteId) -> Result<AthleteDetail> {
        self.requested_ids.lock().unwrap().push(id.to_string());
        Ok(serde_json::from_value(self.detail.clone())?)
    }

    async fn athlete_statistics(&self, id: &NflAthleteId) -> Result<AthleteStatistics> {
        self.requested_ids.lock().unwrap().push(id.to_string());
        Ok(serde_json::from_value(self.statistics.clone())?)
    }
}

fn running_back() -> FakeEspn {
    FakeEspn {
        search: json!({"results": [{"contents": [
            {"displayName": "Derrick Henry", "uid": "s:20~l:28~a:3043078"}
        ]}]}),
        detail: json!({"position": {"abbreviation": "RB"}}),
        statistics: json!({"splits": {"categories": [
            {"name": "rushing", "stats": [
                {"shortDisplayName": "CAR", "displayValue": "2,510"},
                {"name": "Rushing Touchdowns", "displayValue": "106"}
            ]},
            {"name": "receiving", "stats": [
                {"shortDisplayName": "REC", "displayValue": "150"}
            ]}
        ]}}),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_rusher_gets_rushing_selection() {
    let fake = running_back();

    let summary = lookup_nfl_player(&fake, "henry").await.unwrap().unwrap();

    assert_eq!(summary.name, "Derrick Henry");
    assert_eq!(summary.position, "RB");
    assert_eq!(
        serde_json::to_value(&summary.stats).unwrap(),
        json!({"CAR": "2,510", "Rushing Touchdowns": "106"})
    );
    assert_eq!(
        *fake.requested_ids.lock().unwrap(),
        vec!["3043078", "3043078"]
    );
}

#[tokio::test]
async fn test_missing_statistics_yields_note() {
    let fake = FakeEspn {
        statistics: json!({}),
        ..running_back()
    };

    let summary = lookup_nfl_player(&fake, "henry").await.unwrap().unwrap();
    assert_eq!(
        serde_json::to_value(&summary.stats).unwrap(),
        json!({"note": "Stats unavailable"})
    );
}

#[tokio::test]
async fn test_uid_without_athlete_marker_is_not_found() {
    let fake = FakeEspn {
        search: json!({"results": [{"contents": [{"uid": "s:20~l:28~t:12"}]}]}),
        ..Default::default()
    };

    assert!(lookup_nfl_player(&fake, "chiefs").await.unwrap().is_none());
    assert!(fake.requested_ids.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_entry_without_uid_is_not_found() {
    let fake = FakeEspn {
        search: json!({"results": [{"contents": [{"displayName": "No Uid"}]}]}),
        ..Default::default()
    };

    assert!(lookup_nfl_player(&fake, "no uid").await.unwrap().is_none());
}

#[tokio::test]
async fn test_malformed_statistics_is_an_error() {
    let fake = FakeEspn {
        statistics: json!({"splits": {"categories": "not a list"}}),
        ..running_back()
    };

    let result = lookup_nfl_player(&fake, "henry").await;
    assert!(matches!(result, Err(SportsError::Json(_))));
}
