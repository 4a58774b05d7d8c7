//! Checkout Integration Tests
//!
//! Tests for wish-list resolution, pricing, and download estimates.

use storefront::library::samples::{music_server, sample_movies, sample_songs};
use storefront::render::render_json;
use storefront::{ContentServing, MusicServer, Receipt, VideoServer};

fn wish(titles: &[&str]) -> Vec<String> {
    titles.iter().map(|t| t.to_string()).collect()
}

fn music() -> MusicServer {
    MusicServer::from_items(sample_songs(), 5.0).unwrap()
}

fn video() -> VideoServer {
    VideoServer::from_items(sample_movies(), 20.0).unwrap()
}

fn wish_lists() -> Vec<Vec<String>> {
    vec![
        wish(&[]),
        wish(&["Aurora"]),
        wish(&["Nope"]),
        wish(&["Aurora", "Quasar", "Nope"]),
        wish(&["Quasar", "Nebula", "Aurora"]),
        wish(&["Ghost", "Aurora", "Phantom", "Aurora", "Nebula"]),
        wish(&["aurora", "AURORA", " Aurora"]),
    ]
}

#[test]
fn test_scenario_music_with_missing_title() {
    let receipt = music().serve(&wish(&["Aurora", "Quasar", "Nope"]));

    assert_eq!(receipt.item_titles(), vec!["Aurora", "Quasar"]);
    assert_eq!(receipt.missing, vec!["Nope"]);
    assert_eq!(receipt.total_price, 2.08);
    assert!((receipt.estimated_seconds - (5.0 + 6.2) / 5.0).abs() < 1e-9);
    assert!((receipt.estimated_seconds - 2.24).abs() < 1e-9);
}

#[test]
fn test_scenario_video_all_found() {
    let receipt = video().serve(&wish(&["Solaris Rising", "Starlight Express"]));

    assert_eq!(
        receipt.item_titles(),
        vec!["Solaris Rising", "Starlight Express"]
    );
    assert!(receipt.missing.is_empty());
    assert!(receipt.is_complete());
    assert_eq!(receipt.total_price, 22.98);
    assert_eq!(receipt.estimated_seconds, 100.0);
}

#[test]
fn test_scenario_empty_wish_list() {
    let receipt = music().serve(&[]);

    assert!(receipt.items.is_empty());
    assert!(receipt.missing.is_empty());
    assert_eq!(receipt.total_price, 0.0);
    assert_eq!(receipt.estimated_seconds, 0.0);
}

#[test]
fn test_scenario_all_missing() {
    for receipt in [
        music().serve(&wish(&["Unknown"])),
        video().serve(&wish(&["Unknown"])),
    ] {
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.missing, vec!["Unknown"]);
        assert_eq!(receipt.total_price, 0.0);
        assert_eq!(receipt.estimated_seconds, 0.0);
    }
}

#[test]
fn test_found_plus_missing_equals_requested() {
    let server = music();

    for list in wish_lists() {
        let receipt = server.serve(&list);
        assert_eq!(
            receipt.items.len() + receipt.missing.len(),
            list.len(),
            "count mismatch for {:?}",
            list
        );
    }
}

#[test]
fn test_missing_is_exactly_absent_titles_in_order() {
    let server = music();
    let catalog_titles = ["Aurora", "Nebula", "Quasar"];

    for list in wish_lists() {
        let receipt = server.serve(&list);

        let expected_missing: Vec<&String> = list
            .iter()
            .filter(|t| !catalog_titles.contains(&t.as_str()))
            .collect();
        let expected_items: Vec<&str> = list
            .iter()
            .map(String::as_str)
            .filter(|t| catalog_titles.contains(t))
            .collect();

        assert_eq!(receipt.missing.iter().collect::<Vec<_>>(), expected_missing);
        assert_eq!(receipt.item_titles(), expected_items);
    }
}

#[test]
fn test_items_follow_wish_list_not_catalog_order() {
    let receipt = music().serve(&wish(&["Quasar", "Nebula", "Aurora"]));

    assert_eq!(receipt.item_titles(), vec!["Quasar", "Nebula", "Aurora"]);
}

#[test]
fn test_total_price_is_rounded_sum() {
    let server = music();

    for list in wish_lists() {
        let receipt = server.serve(&list);
        let raw: f64 = receipt.items.iter().map(|item| item.price).sum();
        let expected = (raw * 100.0).round() / 100.0;

        assert!((receipt.total_price - expected).abs() < 1e-9);
    }
}

#[test]
fn test_estimate_is_size_over_speed() {
    let server = video();

    let receipt = server.serve(&wish(&["Event Horizon Redux", "Solaris Rising"]));
    assert_eq!(receipt.total_size_mb(), 2400.0);
    assert_eq!(receipt.estimated_seconds, 120.0);
    assert_eq!(receipt.estimated_minutes(), 2.0);
}

#[test]
fn test_zero_speed_yields_infinity() {
    let server = MusicServer::from_items(sample_songs(), 0.0).unwrap();

    for list in wish_lists() {
        let receipt = server.serve(&list);
        assert!(receipt.estimated_seconds.is_infinite());
        assert!(receipt.estimated_seconds > 0.0);
    }
}

#[test]
fn test_half_cent_rounds_up() {
    use storefront::Song;

    // 0.125 is exactly representable: a true half cent
    let server = MusicServer::from_items(vec![Song::new("Half", 1.0, 0.125)], 1.0).unwrap();
    let receipt = server.serve(&wish(&["Half"]));

    assert_eq!(receipt.total_price, 0.13);
}

#[test]
fn test_serve_is_idempotent() {
    let server = video();
    let list = wish(&["Starlight Express", "Nope", "Solaris Rising"]);

    let first: Receipt = server.serve(&list);
    let second: Receipt = server.serve(&list);

    assert_eq!(first, second);
}

#[test]
fn test_zero_speed_receipt_reads_back_from_json() {
    let receipt = music_server(0.0).unwrap().serve(&wish(&["Aurora"]));
    assert!(receipt.estimated_seconds.is_infinite());

    let json = render_json(&receipt).unwrap();
    let parsed: Receipt = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, receipt);
}
