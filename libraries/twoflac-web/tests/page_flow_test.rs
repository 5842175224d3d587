//! End-to-end flows through the page controller
//!
//! Timers run on tokio's paused clock so the real delays are exercised
//! without slowing the suite down.

use std::time::Duration;
use twoflac_core::Platform;
use twoflac_web::render;
use twoflac_web::{Delays, FlacQuality, Modal, Page, StatusKind, Tab};

fn page() -> Page {
    Page::with_seed(Delays::default(), 42)
}

#[tokio::test(start_paused = true)]
async fn search_fills_first_page() {
    let mut page = page();
    let started = tokio::time::Instant::now();

    page.search("  gamelan  ").await;

    assert!(started.elapsed() >= Duration::from_millis(1200));
    assert_eq!(page.results().len(), 9);
    assert!(page.results().iter().all(|s| s.title.starts_with("gamelan ")));
    assert_eq!(page.results_count(), "9 dari 45 hasil ditemukan");
    assert!(page.load_more_visible());
    assert!(!page.state().is_loading);
    assert_eq!(page.state().current_query, "gamelan");

    let banner = page.status().unwrap();
    assert_eq!(banner.kind, StatusKind::Success);
    assert_eq!(banner.message, "Ditemukan 45 hasil untuk \"gamelan\".");
}

#[tokio::test(start_paused = true)]
async fn empty_search_warns_and_keeps_results() {
    let mut page = page();
    page.search("pop").await;

    page.search("   ").await;

    assert_eq!(page.results().len(), 9);
    let banner = page.status().unwrap();
    assert_eq!(banner.kind, StatusKind::Warning);
    assert_eq!(banner.message, "Masukkan kata kunci pencarian terlebih dahulu.");
}

#[tokio::test(start_paused = true)]
async fn load_more_until_exhausted() {
    let mut page = page();
    page.search("rock").await;

    for expected_page in 2..=5 {
        assert!(page.load_more().await);
        assert_eq!(page.state().current_page, expected_page);
    }

    assert_eq!(page.results().len(), 9 + 4 * 6);
    assert_eq!(page.results_count(), "45 dari 45 hasil ditemukan");
    assert!(!page.load_more_visible());
    assert!(!page.state().has_more_results);

    assert!(!page.load_more().await);
    assert_eq!(page.state().current_page, 5);
}

#[tokio::test(start_paused = true)]
async fn new_search_resets_paging() {
    let mut page = page();
    page.search("rock").await;
    page.load_more().await;
    page.load_more().await;

    page.search("jazz").await;

    assert_eq!(page.state().current_page, 1);
    assert_eq!(page.state().current_query, "jazz");
    assert!(page.state().has_more_results);
    assert_eq!(page.results().len(), 9);
}

#[tokio::test(start_paused = true)]
async fn convert_replaces_results_with_one_card() {
    let mut page = page();
    page.search("rock").await;

    page.convert("https://open.spotify.com/track/abc").await;

    assert_eq!(page.results().len(), 1);
    assert_eq!(page.results()[0].platform, Platform::Spotify);
    assert_eq!(page.results()[0].title, "Lagu dari Spotify");
    assert_eq!(page.results_count(), "1 hasil ditemukan");
    assert!(!page.load_more_visible());
    assert_eq!(
        page.status().unwrap().message,
        "Berhasil mengonversi dari spotify!"
    );
}

#[tokio::test(start_paused = true)]
async fn convert_rejects_wrong_tab() {
    let mut page = page();
    page.select_tab(Tab::Only(Platform::YouTube));

    page.convert("https://soundcloud.com/artist/track").await;

    assert!(page.results().is_empty());
    let banner = page.status().unwrap();
    assert_eq!(banner.kind, StatusKind::Error);
    assert_eq!(banner.message, "URL harus dari Youtube.");

    // errors do not auto-dismiss
    tokio::time::advance(Duration::from_secs(30)).await;
    assert!(page.status().is_some());
}

#[tokio::test(start_paused = true)]
async fn success_banner_auto_dismisses() {
    let mut page = page();
    page.convert("https://youtu.be/abc").await;
    assert!(page.status().is_some());

    tokio::time::advance(Duration::from_secs(5)).await;
    assert!(page.status().is_none());
}

#[tokio::test(start_paused = true)]
async fn trending_chart_is_replaced() {
    let mut page = page();

    page.load_trending("day").await;
    let first: Vec<String> = page.trending().iter().map(|t| t.id.clone()).collect();
    assert_eq!(first.len(), 8);
    assert_eq!(page.trending_window(), "day");

    page.load_trending("month").await;
    assert_eq!(page.trending().len(), 8);
    assert_eq!(page.trending_window(), "month");
}

#[tokio::test(start_paused = true)]
async fn details_then_download_closes_modal() {
    let mut page = page();
    page.search("keroncong").await;
    let song = page.results()[0].clone();

    page.show_details(&song).await;
    let Modal::Open(details) = page.modal() else {
        panic!("modal should be open");
    };
    assert_eq!(details.song.id, song.id);
    assert_eq!(details.tracks.len(), 3);

    page.select_quality(FlacQuality::StudioMaster);
    page.download(&song).await;

    assert_eq!(page.modal(), &Modal::Closed);
    let link = page.downloads().last().unwrap();
    assert_eq!(link.href, "#");
    assert_eq!(link.filename, "keroncong_versi_lengkap_24bit-hr.flac");
    assert_eq!(
        page.status().unwrap().message,
        format!("\"{}\" berhasil diunduh!", song.title)
    );
}

#[tokio::test(start_paused = true)]
async fn quality_resets_when_another_modal_opens() {
    let mut page = page();
    page.search("dangdut").await;
    let first = page.results()[0].clone();
    let second = page.results()[1].clone();

    page.show_details(&first).await;
    page.select_quality(FlacQuality::StudioMaster);
    page.close_modal();

    page.show_details(&second).await;
    assert_eq!(page.quality(), FlacQuality::Cd);
    let Modal::Open(details) = page.modal() else {
        panic!("modal should be open");
    };
    let html = render::details_panel(details, page.quality());
    assert!(html.contains(r#"class="quality-btn active" data-quality="16bit""#));

    page.download(&second).await;
    let link = page.downloads().last().unwrap();
    assert!(link.filename.ends_with("_16bit.flac"), "{}", link.filename);
}

#[tokio::test(start_paused = true)]
async fn trending_card_opens_details() {
    let mut page = page();
    page.load_trending("week").await;
    let item = page.trending()[0].clone();

    page.show_trending_details(&item).await;

    let Modal::Open(details) = page.modal() else {
        panic!("modal should be open");
    };
    assert_eq!(details.album, "Single");
    assert_eq!(details.song.thumbnail.as_deref(), Some(item.thumbnail.as_str()));
}

#[tokio::test(start_paused = true)]
async fn preview_is_announced() {
    let mut page = page();
    page.preview("any");
    assert_eq!(
        page.status().unwrap().message,
        "Fitur preview akan segera tersedia."
    );
}

#[tokio::test(start_paused = true)]
async fn initialize_loads_everything_and_renders() {
    let mut page = page();
    page.initialize().await;

    assert_eq!(page.trending().len(), 8);
    assert_eq!(page.state().current_query, "musik terbaru");
    assert_eq!(page.results().len(), 9);

    let html = render::document(&page);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("class=\"result-card will-change\"").count(), 9);
    assert_eq!(html.matches("class=\"trending-card will-change\"").count(), 8);
    assert!(html.contains("9 dari 45 hasil ditemukan"));
    assert!(html.contains(r#"value="musik terbaru""#));
    assert!(!html.contains("musicModal"));
}
