//! HTML rendering of cards, the details panel and the landing page
//!
//! All text coming from songs or user input goes through [`escape`].

use crate::page::{Modal, Page};
use crate::song::{FlacQuality, Song, SongDetails, TrendingItem};
use crate::status::StatusBanner;
use crate::theme::{platform_color, platform_icon};
use std::fmt::Write;

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn result_card(song: &Song) -> String {
    let color = platform_color(Some(song.platform));
    let icon = platform_icon(Some(song.platform));

    let art = match &song.thumbnail {
        Some(thumbnail) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(thumbnail),
            escape(&song.title)
        ),
        None => format!(
            r#"<div class="album-art-placeholder" style="background: linear-gradient(135deg, {color}, {color}80);"><i class="{icon}"></i></div>"#
        ),
    };

    let album = song
        .album
        .as_deref()
        .map(|album| {
            format!(
                r#"<div class="song-album"><i class="fas fa-compact-disc"></i> {}</div>"#,
                escape(album)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="result-card will-change" data-id="{id}"><div class="album-art">{art}<div class="platform-badge"><i class="{icon}"></i> {platform}</div></div><div class="song-info"><div class="song-title">{title}</div><div class="song-artist"><i class="fas fa-user"></i> {artist}</div>{album}<div class="song-meta"><div class="song-duration"><i class="far fa-clock"></i> {duration}</div><div class="quality-badge">{quality}</div></div></div></div>"#,
        id = escape(&song.id),
        platform = song.platform.display_name(),
        title = escape(&song.title),
        artist = escape(&song.artist),
        duration = escape(song.duration.as_deref().unwrap_or("3:45")),
        quality = escape(song.quality.as_deref().unwrap_or("FLAC • 24-bit")),
    )
}

pub fn trending_card(item: &TrendingItem) -> String {
    format!(
        r#"<div class="trending-card will-change" data-id="{id}"><div class="trending-rank">{rank}</div><div class="trending-album-art"><img src="{thumbnail}" alt="{title}" loading="lazy"></div><div class="trending-info"><h4>{title}</h4><p>{artist}</p><div class="trending-stats"><i class="fas fa-play"></i><span>{plays} plays</span><i class="{icon}" style="margin-left: auto;"></i></div></div></div>"#,
        id = escape(&item.id),
        rank = item.rank,
        thumbnail = escape(&item.thumbnail),
        title = escape(&item.title),
        artist = escape(&item.artist),
        plays = escape(&item.plays),
        icon = platform_icon(Some(item.platform)),
    )
}

pub fn status_banner(banner: &StatusBanner) -> String {
    format!(
        r#"<div class="status-message {}" style="display: block;">{}</div>"#,
        banner.kind.css_class(),
        escape(&banner.message)
    )
}

pub fn details_loading() -> String {
    r#"<div style="text-align: center; padding: 2rem;"><div class="loading-spinner"></div><p>Memuat detail musik...</p></div>"#.to_string()
}

pub fn details_panel(details: &SongDetails, selected: FlacQuality) -> String {
    let song = &details.song;
    let color = platform_color(Some(song.platform));

    let art = match &song.thumbnail {
        Some(thumbnail) => format!(
            r#"<img src="{}" alt="{}" style="width: 100%; height: 100%; object-fit: cover; border-radius: 12px;">"#,
            escape(thumbnail),
            escape(&song.title)
        ),
        None => format!(
            r#"<i class="{}" style="font-size: 4rem; color: white;"></i>"#,
            platform_icon(Some(song.platform))
        ),
    };

    let mut qualities = String::new();
    for quality in FlacQuality::ALL {
        let active = if quality == selected { " active" } else { "" };
        let _ = write!(
            qualities,
            r#"<button class="quality-btn{}" data-quality="{}">{}</button>"#,
            active,
            quality.key(),
            quality.button_label()
        );
    }

    let mut tracks = String::new();
    for (index, track) in details.tracks.iter().enumerate() {
        let _ = write!(
            tracks,
            r#"<div class="track-row"><div><span class="track-number">{}.</span><span>{}</span></div><span class="track-duration">{}</span></div>"#,
            index + 1,
            escape(&track.title),
            escape(&track.duration)
        );
    }

    format!(
        r#"<div class="detail-header"><div class="album-art-large" style="background: linear-gradient(135deg, {color}, {color}80);">{art}</div><div class="detail-info"><h1 class="detail-title">{title}</h1><h2 class="detail-artist"><i class="fas fa-user"></i> {artist}</h2><div class="detail-meta"><div class="meta-item"><i class="fas fa-compact-disc"></i><span>Album: {album}</span></div><div class="meta-item"><i class="fas fa-calendar"></i><span>Tahun: {year}</span></div><div class="meta-item"><i class="fas fa-music"></i><span>Genre: {genre}</span></div><div class="meta-item"><i class="fas fa-clock"></i><span>Durasi: {duration}</span></div></div><div class="detail-description"><p>{description}</p></div><div class="quality-options"><h4><i class="fas fa-file-audio"></i> Pilih Kualitas FLAC</h4><div class="quality-buttons">{qualities}</div></div><div class="detail-actions"><button class="detail-download-btn" data-id="{id}"><i class="fas fa-download"></i> Unduh FLAC</button><button class="detail-preview-btn" data-id="{id}"><i class="fas fa-play"></i> Preview</button></div></div></div><div class="track-list"><h3><i class="fas fa-list"></i> Daftar Track</h3>{tracks}</div><div class="audio-info"><h4><i class="fas fa-info-circle"></i> Informasi Teknis</h4><div>Format: FLAC</div><div>Bitrate: {bitrate}</div><div>Sample Rate: {sample_rate}</div><div>Bit Depth: {bit_depth}</div><div>Ukuran File: {size}</div></div>"#,
        title = escape(&song.title),
        artist = escape(&song.artist),
        album = escape(&details.album),
        year = escape(&details.year),
        genre = escape(&details.genre.join(", ")),
        duration = escape(&details.duration),
        description = escape(&details.description),
        id = escape(&song.id),
        bitrate = escape(&details.bitrate),
        sample_rate = escape(&details.sample_rate),
        bit_depth = escape(&details.bit_depth),
        size = escape(&details.size),
    )
}

/// Render the whole landing page in its current state
pub fn document(page: &Page) -> String {
    let status = page.status().map(status_banner).unwrap_or_default();
    let loading = if page.state().is_loading { "block" } else { "none" };
    let load_more = if page.load_more_visible() { "block" } else { "none" };
    let results: String = page.results().iter().map(result_card).collect();
    let trending: String = page.trending().iter().map(trending_card).collect();

    let modal = match page.modal() {
        Modal::Closed => String::new(),
        Modal::Loading => modal_wrapper(&details_loading()),
        Modal::Open(details) => modal_wrapper(&details_panel(details, page.quality())),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>2FLAC - Konversi Musik ke FLAC</title>
</head>
<body>
<main>
<section class="converter">
<input id="urlInput" type="text" placeholder="{placeholder}">
<button id="convertBtn">Konversi</button>
</section>
<section class="search">
<input id="searchInput" type="text" value="{query}">
<button id="searchBtn">Cari</button>
</section>
{status}
<div id="loadingIndicator" style="display: {loading};"><div class="loading-spinner"></div></div>
<section class="results">
<div id="resultsCount">{count}</div>
<div id="resultsGrid" class="results-grid">{results}</div>
<div id="loadMoreContainer" style="display: {load_more};"><button id="loadMoreBtn">Muat Lebih Banyak</button></div>
</section>
<section class="trending">
<div id="trendingGrid" class="trending-grid">{trending}</div>
</section>
</main>
{modal}
</body>
</html>
"#,
        placeholder = escape(page.url_placeholder()),
        query = escape(&page.state().current_query),
        count = escape(page.results_count()),
    )
}

fn modal_wrapper(content: &str) -> String {
    format!(
        r#"<div id="musicModal" class="modal" style="display: flex;"><div class="modal-content"><span id="closeModal" class="close-modal">&times;</span><div id="musicDetails">{}</div></div></div>"#,
        content
    )
}
