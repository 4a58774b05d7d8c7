//! Sample catalogs used by the demo and the CLI.
//!
//! Each call builds fresh values; nothing here is shared process state.

use super::catalog::CatalogError;
use super::content::{Movie, Song};
use crate::core::{MusicServer, VideoServer};

/// Default music download speed (MB/s)
pub const DEFAULT_MUSIC_SPEED_MBPS: f64 = 5.0;

/// Default video download speed (MB/s)
pub const DEFAULT_VIDEO_SPEED_MBPS: f64 = 20.0;

pub fn sample_songs() -> Vec<Song> {
    vec![
        Song::new("Aurora", 5.0, 0.99),
        Song::new("Nebula", 7.5, 1.29),
        Song::new("Quasar", 6.2, 1.09),
    ]
}

pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new("Solaris Rising", 900.0, 12.99),
        Movie::new("Event Horizon Redux", 1500.0, 14.99),
        Movie::new("Starlight Express", 1100.0, 9.99),
    ]
}

/// Music server over the sample songs
pub fn music_server(speed_mbps: f64) -> Result<MusicServer, CatalogError> {
    MusicServer::from_items(sample_songs(), speed_mbps)
}

/// Video server over the sample movies
pub fn video_server(speed_mbps: f64) -> Result<VideoServer, CatalogError> {
    VideoServer::from_items(sample_movies(), speed_mbps)
}
