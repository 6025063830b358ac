//! End-to-end lookup flows through the full dispatcher.

mod helpers;

use helpers::TestHarness;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn jockey_details_from_free_text() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/jockeys/search"))
        .and(query_param("name", "Frankie Dettori"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_results": [{"id": "jky_001", "name": "Frankie Dettori"}]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let reply = h
        .send_expecting_reply("Give me details about the jockey Frankie Dettori.")
        .await;
    assert!(reply.contains("Name: Frankie Dettori"));
    assert!(reply.contains("ID: jky_001"));
}

#[tokio::test]
async fn horse_details_fall_back_to_standard_exactly_once() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/horses/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_results": [{"id": "hrs_001"}]
        })))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/horses/hrs_001/pro"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/horses/hrs_001/standard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Thunderbolt", "sire": "Storm Cat", "dam": "Misty", "damsire": "Rainier",
            "colour": "Bay"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let reply = h
        .send_expecting_reply("details for the horse Thunderbolt")
        .await;
    assert!(reply.contains("Name: Thunderbolt"));
    assert!(reply.contains("Sire: Storm Cat"));
    assert!(reply.contains("Colour: Bay"));
    // Absent optional fields are omitted, never shown as placeholders.
    assert!(!reply.contains("Breeder:"));
    assert!(!reply.contains("N/A"));
}

#[tokio::test]
async fn analysis_truncates_seven_buckets_to_five() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/horses/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_results": [{"id": "hrs_001"}]
        })))
        .mount(&h.server)
        .await;

    let buckets: Vec<serde_json::Value> = (5..12)
        .map(|f| {
            serde_json::json!({
                "dist": format!("{f}f"), "runners": 10, "1st": 2, "win_%": 0.2
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/v1/horses/hrs_001/analysis/distances"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_runners": 70,
            "distances": buckets
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let reply = h
        .send_expecting_reply("analysis for the horse Thunderbolt")
        .await;
    assert_eq!(reply.matches("runs,").count(), 5);
    assert!(reply.contains("(showing first 5 of 7)"));
    assert!(reply.contains("20.0%"));
}

#[tokio::test]
async fn damsire_message_routes_to_damsire_not_sire() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/damsires/search"))
        .and(query_param("name", "Galileo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_results": [{"id": "dsi_001"}]
        })))
        .expect(1)
        .mount(&h.server)
        .await;
    // The sire search endpoint must never be hit for a damsire query.
    Mock::given(method("GET"))
        .and(path("/v1/sires/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    let reply = h
        .send_expecting_reply("info on the damsire Galileo")
        .await;
    assert!(reply.contains("Damsire details:"));
    assert!(reply.contains("ID: dsi_001"));
}

#[tokio::test]
async fn trainer_results_render_bounded_list() {
    let h = TestHarness::new().await;
    Mock::given(method("GET"))
        .and(path("/v1/trainers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_results": [{"id": "trn_001"}]
        })))
        .mount(&h.server)
        .await;

    let results: Vec<serde_json::Value> = (1..=6)
        .map(|d| {
            serde_json::json!({
                "date": format!("2026-07-0{d}"), "course": "Ascot", "race_name": "Handicap"
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/v1/trainers/trn_001/results"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": results})),
        )
        .mount(&h.server)
        .await;

    let reply = h
        .send_expecting_reply("results for the trainer Aidan O'Brien")
        .await;
    assert_eq!(reply.matches("Ascot").count(), 5);
    assert!(reply.contains("(showing first 5 of 6)"));
}

#[tokio::test]
async fn unrelated_message_is_left_unhandled() {
    let h = TestHarness::new().await;
    assert!(!h.send("what's the weather like today?").await);
    assert!(h.sink.replies().is_empty());
}
