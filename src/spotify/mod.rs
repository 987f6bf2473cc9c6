//! # Spotify Integration Module
//!
//! Thin client for the two Spotify endpoints this tool talks to.
//!
//! ```text
//! Command Layer (cli)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     └── Playlist Operations (fetch playlist document)
//!          ↓
//! HTTP Layer (reqwest)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials grant
//! - `GET /playlists/{playlist_id}` - Playlist document, fixed to `market=ES`
//!
//! Both operations take the [`reqwest::Client`] and
//! [`crate::config::Endpoints`] explicitly. Nothing here retries, refreshes
//! tokens or paginates.

pub mod auth;
pub mod playlist;
