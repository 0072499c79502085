use chrono::{TimeZone, Utc};
use httpmock::prelude::*;
use session_finder::core::report;
use session_finder::domain::ports::ReportSink;
use session_finder::{Coordinate, FilterCriteria, FinderEngine, HttpSessionSource, LocalStorage};
use tempfile::TempDir;

fn snapshot_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "ended",
            "program": { "name": "Jr STEM: Robotics", "category": "STEM" },
            "partner": {
                "name": "Sacramento Rec Center",
                "location": "Sacramento",
                "city": "Sacramento",
                "state": "CA",
                "postalCode": "95814",
                "latitude": 38.58,
                "longitude": -121.49
            },
            "startDate": "2025-09-01T00:00:00Z",
            "endDate": "2025-12-15T00:00:00Z",
            "capacity": 20
        },
        {
            "id": "near",
            "program": { "name": "Jr STEM: Robotics", "category": "STEM" },
            "partner": {
                "name": "Sacramento Rec Center",
                "location": "Sacramento",
                "city": "Sacramento",
                "state": "CA",
                "postalCode": "95814",
                "latitude": 38.58,
                "longitude": -121.49
            },
            "startDate": "2026-09-01T00:00:00Z",
            "endDate": "2026-12-15T00:00:00Z",
            "capacity": 20
        },
        {
            "id": "tba",
            "program": { "name": "Jr Sports: Soccer" },
            "partner": { "name": "New Partner", "location": "Location TBA" },
            "startDate": "2026-09-01T00:00:00Z",
            "endDate": "2026-12-15T00:00:00Z",
            "capacity": 12
        },
        {
            "id": "reno",
            "program": { "name": "Jr Defense" },
            "partner": {
                "name": "Reno Partner",
                "city": "Reno",
                "state": "NV",
                "latitude": 39.53,
                "longitude": -119.81
            },
            "startDate": "2026-09-01T00:00:00Z",
            "endDate": "2026-12-15T00:00:00Z",
            "capacity": 16
        }
    ])
}

#[tokio::test]
async fn test_end_to_end_search_with_real_http() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/sessions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(snapshot_json());
    });

    let source = HttpSessionSource::new(server.url("/api/sessions"));
    let engine = FinderEngine::new(source);
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();

    let criteria = FilterCriteria {
        query: String::new(),
        user_coordinate: Some(Coordinate::new(38.58, -121.49)),
        radius_miles: 25.0,
        sort_by_distance: true,
    };

    let matches = engine.run_at(&criteria, now).await.unwrap();

    api_mock.assert();

    // "ended" is dropped by the upcoming pre-filter, "reno" by the radius
    // stage; the unlocated session survives and sorts last.
    let ids: Vec<&str> = matches.iter().map(|m| m.session.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "tba"]);
    assert_eq!(matches[0].distance_miles, Some(0.0));
    assert_eq!(matches[1].distance_miles, None);
}

#[tokio::test]
async fn test_end_to_end_query_only() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/sessions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(snapshot_json());
    });

    let source = HttpSessionSource::new(server.url("/api/sessions"));
    let engine = FinderEngine::new(source);
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();

    let criteria = FilterCriteria {
        query: "reno".to_string(),
        ..Default::default()
    };

    let matches = engine.run_at(&criteria, now).await.unwrap();

    api_mock.assert();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].session.id, "reno");
    // No user coordinate, so no distance annotation.
    assert!(matches[0].distance_miles.is_none());
}

#[tokio::test]
async fn test_end_to_end_server_error_propagates() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/sessions");
        then.status(500);
    });

    let source = HttpSessionSource::new(server.url("/api/sessions"));
    let engine = FinderEngine::new(source);

    let result = engine.run(&FilterCriteria::default()).await;

    api_mock.assert();
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_csv_report() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/sessions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(snapshot_json());
    });

    let source = HttpSessionSource::new(server.url("/api/sessions"));
    let engine = FinderEngine::new(source);
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();

    let matches = engine
        .run_at(&FilterCriteria::default(), now)
        .await
        .unwrap();
    api_mock.assert();

    let rendered = report::render_csv(&matches).unwrap();
    let storage = LocalStorage::new(output_path.clone());
    storage
        .write_report("sessions.csv", rendered.as_bytes())
        .await
        .unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("sessions.csv")).unwrap();
    let lines: Vec<&str> = written.trim_end().split('\n').collect();

    // Header plus the three upcoming sessions.
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("id,program,partner"));
    assert!(written.contains("Jr STEM: Robotics"));
    assert!(!written.contains("\"ended\""));
    assert!(!lines.iter().any(|line| line.starts_with("ended,")));
}
