// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Personal music playlist manager.
//!
//! Users own named playlists of format-validated songs (MP3/WAV).
//! Playlists play, shuffle, and repeat their songs in order, and export
//! their contents to plain text files.
//!
//! # Example
//!
//! ```
//! use mixtape::{Song, User};
//!
//! # fn main() -> mixtape::Result<()> {
//! let mut user = User::new("listener");
//! let playlist = user.create_playlist("Morning");
//! playlist.add_song(Song::mp3("sunrise.mp3", "Dawn Patrol", 3.5)?);
//! playlist.play_all()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod playlist;
pub mod song;
pub mod user;

pub use error::{Error, Result};
pub use playlist::Playlist;
pub use song::{Song, SongFormat};
pub use user::User;
