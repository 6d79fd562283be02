// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Library file support.
//!
//! A library file is a YAML description of a user and their playlists,
//! used to drive a scenario from a file instead of the built-in demo.
//! Songs listed here still go through the validating constructors when
//! the library is built.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::song::{Song, SongFormat};
use crate::user::User;

/// Root of a library file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryFile {
    /// Owning user's name
    pub user: String,
    /// Playlist definitions
    #[serde(default)]
    pub playlists: Vec<PlaylistEntry>,
}

/// A playlist definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistEntry {
    /// Playlist name (also names the export file)
    pub name: String,
    /// Songs in playback order
    #[serde(default)]
    pub songs: Vec<SongEntry>,
}

/// A song definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongEntry {
    /// Audio format ("mp3" or "wav")
    pub format: SongFormat,
    /// Track title, including the filename suffix
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration: f64,
}

impl LibraryFile {
    /// Load a library from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(path = ?path.as_ref(), "loading library file");
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read library file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a library from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML library")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize library to YAML")
    }

    /// Save the library to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write library file: {:?}", path.as_ref()))
    }

    /// Build a [`User`] with every listed playlist and song.
    ///
    /// Each song passes through the validating constructor; the first
    /// invalid title aborts the build.
    pub fn build_user(&self) -> crate::error::Result<User> {
        let mut user = User::new(&*self.user);
        for entry in &self.playlists {
            let playlist = user.create_playlist(&*entry.name);
            for song in &entry.songs {
                playlist.add_song(Song::new(
                    song.format,
                    &*song.title,
                    &*song.artist,
                    song.duration,
                )?);
            }
        }
        Ok(user)
    }
}
