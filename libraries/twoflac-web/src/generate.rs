//! Client-side result generators
//!
//! The page fabricates every card it shows. Platforms are assigned at random;
//! everything else is templated from the loop index and the user's input.

use crate::song::{Song, SongDetails, TrendingItem};
use crate::theme::color_hex;
use rand::seq::SliceRandom;
use rand::Rng;
use twoflac_core::{Platform, Track};

const SEARCH_VARIANTS: [&str; 5] = ["Versi Lengkap", "Remix", "Acoustic", "Live", "Cover"];
const SEARCH_ARTISTS: [&str; 5] = [
    "Artis Terkenal",
    "Band Indie",
    "DJ Producer",
    "Solo Singer",
    "Various Artists",
];
const SEARCH_ALBUMS: [&str; 5] = ["Album Terbaru", "Best Of", "Compilation", "Soundtrack", "Mixtape"];
const SEARCH_QUALITIES: [&str; 3] = ["FLAC • 16-bit", "FLAC • 24-bit", "FLAC • Lossless"];
const SEARCH_GENRES: [[&str; 2]; 5] = [
    ["Pop", "Rock"],
    ["Electronic", "Dance"],
    ["Hip Hop", "R&B"],
    ["Jazz", "Blues"],
    ["Classical", "Instrumental"],
];

const TRENDING_GENRES: [&str; 5] = ["Pop", "Rock", "Electronic", "Hip Hop", "R&B"];
const TRENDING_ARTISTS: [&str; 5] = ["A", "B", "C", "D", "E"];
const TRENDING_COUNT: usize = 8;

/// Songs on the first page of a search
pub const FIRST_PAGE_LEN: usize = 9;
/// Songs appended by each "load more"
pub const NEXT_PAGE_LEN: usize = 6;

fn random_platform<R: Rng + ?Sized>(rng: &mut R) -> Platform {
    *Platform::ALL.choose(rng).unwrap_or(&Platform::YouTube)
}

fn initial(platform: Platform) -> char {
    platform.display_name().chars().next().unwrap_or('?')
}

/// Generate one page of search results for `query`
pub fn search_page<R: Rng + ?Sized>(query: &str, page: usize, stamp: i64, rng: &mut R) -> Vec<Song> {
    let len = if page <= 1 { FIRST_PAGE_LEN } else { NEXT_PAGE_LEN };

    (0..len)
        .map(|i| {
            let index = page.saturating_sub(1) * FIRST_PAGE_LEN + i;
            let platform = random_platform(rng);

            Song {
                id: format!("search_{}_{}", stamp, index),
                title: format!("{} {}", query, SEARCH_VARIANTS[i % 5]),
                artist: SEARCH_ARTISTS[i % 5].to_string(),
                album: Some(format!("{} {}", SEARCH_ALBUMS[i % 5], 2023 - (i % 3))),
                duration: Some(format!("{}:{:02}", 3 + (i % 3), (45 + i * 10) % 60)),
                platform,
                quality: Some(SEARCH_QUALITIES[i % 3].to_string()),
                thumbnail: Some(format!(
                    "https://via.placeholder.com/300x180/{}/ffffff?text={}",
                    color_hex(platform),
                    initial(platform)
                )),
                year: Some((2020 + (i % 4)).to_string()),
                genre: Some(SEARCH_GENRES[i % 5].iter().map(|g| g.to_string()).collect()),
            }
        })
        .collect()
}

/// Generate the trending chart
pub fn trending<R: Rng + ?Sized>(stamp: i64, rng: &mut R) -> Vec<TrendingItem> {
    (0..TRENDING_COUNT)
        .map(|i| {
            let platform = random_platform(rng);
            let plays = rng.gen_range(50..150);

            TrendingItem {
                id: format!("trending_{}_{}", stamp, i),
                rank: i + 1,
                title: format!("Lagu Trending {}", TRENDING_GENRES[i % 5]),
                artist: format!("Artis {}", TRENDING_ARTISTS[i % 5]),
                plays: format!("{}K", plays),
                platform,
                thumbnail: format!(
                    "https://via.placeholder.com/250x120/{}/ffffff?text=Trending+{}",
                    color_hex(platform),
                    i + 1
                ),
            }
        })
        .collect()
}

/// The single card shown after converting a URL from `platform`
pub fn converted_song(platform: Platform, stamp: i64) -> Song {
    let thumbnail = match platform {
        Platform::YouTube => "https://i.ytimg.com/vi/sample/hqdefault.jpg",
        Platform::Spotify => "https://i.scdn.co/image/ab67616d0000b273sample",
        Platform::SoundCloud => "https://i1.sndcdn.com/artworks-sample.jpg",
    };

    Song {
        id: format!("converted_{}", stamp),
        title: format!("Lagu dari {}", platform.display_name()),
        artist: "Various Artists".to_string(),
        album: Some("Converted Album".to_string()),
        duration: Some("3:45".to_string()),
        platform,
        quality: Some("FLAC • 24-bit".to_string()),
        thumbnail: Some(thumbnail.to_string()),
        year: Some("2023".to_string()),
        genre: Some(vec!["Pop".to_string(), "Electronic".to_string()]),
    }
}

/// Extend a card with the fields shown in the details modal
pub fn song_details(song: &Song) -> SongDetails {
    let duration = song.duration.clone().unwrap_or_else(|| "3:45".to_string());
    let leading_genre = song
        .genre
        .as_ref()
        .and_then(|genres| genres.first().cloned())
        .unwrap_or_else(|| "pop".to_string());

    SongDetails {
        song: song.clone(),
        album: song.album.clone().unwrap_or_else(|| "Single".to_string()),
        year: song.year.clone().unwrap_or_else(|| "2023".to_string()),
        genre: song
            .genre
            .clone()
            .unwrap_or_else(|| vec!["Pop".to_string(), "Electronic".to_string()]),
        duration: duration.clone(),
        bitrate: "1411 kbps".to_string(),
        sample_rate: "44.1 kHz".to_string(),
        bit_depth: "16-bit".to_string(),
        size: "25.4 MB".to_string(),
        description: format!(
            "\"{}\" adalah lagu {} oleh {}. Dikonversi ke format FLAC lossless dengan kualitas studio.",
            song.title, leading_genre, song.artist
        ),
        tracks: vec![
            Track::new(song.title.clone(), duration),
            Track::new(format!("{} (Instrumental)", song.title), "3:45"),
            Track::new(format!("{} (Acoustic)", song.title), "4:10"),
        ],
    }
}

/// Filename of the simulated download: non-alphanumerics become `_`, lowercased
pub fn download_filename(title: &str, quality_key: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}_{}.flac", stem, quality_key)
}
