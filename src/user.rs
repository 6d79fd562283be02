// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Users and playlist ownership.

use crate::playlist::Playlist;

/// A user owning a named collection of playlists.
///
/// Playlists are owned exclusively by the user that created them; there is
/// no deletion operation.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    playlists: Vec<Playlist>,
}

impl User {
    /// Create a user with no playlists
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            playlists: Vec::new(),
        }
    }

    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the playlists in creation order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Get the playlists mutably, for playback and export
    pub fn playlists_mut(&mut self) -> &mut [Playlist] {
        &mut self.playlists
    }

    /// Create a new empty playlist owned by this user.
    ///
    /// Appends it to the user's playlists, prints a confirmation line, and
    /// returns a mutable borrow of it. Always succeeds; duplicate names
    /// are permitted.
    pub fn create_playlist(&mut self, name: impl Into<String>) -> &mut Playlist {
        let name = name.into();
        println!("Playlist created: {}", name);

        let index = self.playlists.len();
        self.playlists.push(Playlist::new(name));
        &mut self.playlists[index]
    }
}
