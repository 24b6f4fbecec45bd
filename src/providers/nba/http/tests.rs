//! HTTP tests for the NBA client against a mocked stats.nba.com

use super::*;
use crate::{core::build_client, providers::nba::lookup_nba_player};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> NbaClient {
    NbaClient::new(
        build_client(Duration::from_secs(5)).unwrap(),
        server.uri(),
        "2025-26",
    )
}

fn roster_response() -> serde_json::Value {
    json!({
        "resource": "commonallplayers",
        "resultSets": [{
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "FROM_YEAR", "TO_YEAR"],
            "rowSet": [
                [2544, "James, LeBron", "LeBron James", 1, "2003", "2025"],
                [201939, "Curry, Stephen", "Stephen Curry", 1, "2009", "2025"]
            ]
        }]
    })
}

async fn mount_roster(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/stats/commonallplayers"))
        .and(query_param("LeagueID", "00"))
        .and(query_param("Season", "2025-26"))
        .and(query_param("IsOnlyCurrentSeason", "0"))
        .and(header("x-nba-stats-origin", "stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster_response()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_roster_is_fetched_once() {
    let server = MockServer::start().await;
    mount_roster(&server, 1).await;

    let client = client_for(&server);
    let first = client.roster().await.unwrap();
    let second = client.roster().await.unwrap();

    assert_eq!(first.len(), 2);
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_lookup_against_mocked_provider() {
    let server = MockServer::start().await;
    mount_roster(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/stats/playercareerstats"))
        .and(query_param("PlayerID", "201939"))
        .and(query_param("PerMode", "Totals"))
        .and(header("referer", "https://www.nba.com/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultSets": [{
                "name": "SeasonTotalsRegularSeason",
                "headers": ["PLAYER_ID", "SEASON_ID", "GP", "FG_PCT", "FG3_PCT", "REB", "AST", "PTS"],
                "rowSet": [
                    [201939, "2009-10", 80, 0.462, 0.437, 356, 472, 1399],
                    [201939, "2010-11", 74, 0.480, 0.443, 286, 432, 1373]
                ]
            }]
        })))
        .mount(&server)
        .await;

    let summary = lookup_nba_player(&client_for(&server), "stephen curry")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&summary).unwrap(),
        json!({
            "name": "Stephen Curry",
            "sport": "NBA",
            "position": "N/A",
            "stats": {"PPG": 18.0, "RPG": 4.2, "APG": 5.9, "FG%": 47.1, "3P%": 44.0, "GP": 154}
        })
    );
}

#[tokio::test]
async fn test_career_rows_without_result_sets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/playercareerstats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
        .mount(&server)
        .await;

    let rows = client_for(&server)
        .career_rows(NbaPlayerId::new(1))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_roster_failure_is_retried_on_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/commonallplayers"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_roster(&server, 1).await;

    let client = client_for(&server);
    assert!(client.roster().await.is_err());
    assert_eq!(client.roster().await.unwrap().len(), 2);
}
