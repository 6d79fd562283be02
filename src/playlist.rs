// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlists: named, ordered collections of songs.
//!
//! Supports appending, sequential playback, unbiased in-place shuffling,
//! and plain-text export of the stored order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::song::Song;

/// A named, ordered collection of songs.
///
/// Insertion order is significant and duplicates are permitted. A playlist
/// is owned exclusively by the user that created it.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    /// Get the playlist name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the songs in stored order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Append a song, printing a confirmation line. Always succeeds.
    pub fn add_song(&mut self, song: Song) {
        println!("Added: {} to playlist {}", song.title(), self.name);
        self.songs.push(song);
    }

    /// Play every song in stored order.
    ///
    /// Fails with [`Error::PlaylistEmpty`] when the playlist has no songs;
    /// otherwise plays all of them sequentially with no early termination.
    pub fn play_all(&self) -> Result<()> {
        if self.songs.is_empty() {
            return Err(Error::PlaylistEmpty);
        }
        for song in &self.songs {
            song.play();
        }
        Ok(())
    }

    /// Shuffle the stored order in place, then play every song.
    ///
    /// The empty check gates before any mutation. The permutation is
    /// unbiased (Fisher-Yates) and permanently alters the stored order;
    /// the RNG is supplied by the caller so shuffles can be reproduced.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.songs.is_empty() {
            return Err(Error::PlaylistEmpty);
        }
        self.songs.shuffle(rng);
        for song in &self.songs {
            song.play();
        }
        Ok(())
    }

    /// Replay every song in the current stored order.
    ///
    /// Identical contract to [`Playlist::play_all`]; there is no repeat
    /// count.
    pub fn repeat_all(&self) -> Result<()> {
        self.play_all()
    }

    /// Export the playlist to `<name>.txt` in the working directory.
    ///
    /// The file is created or overwritten.
    pub fn save_to_file(&self) -> Result<()> {
        self.save_to_path(format!("{}.txt", self.name))
    }

    /// Export the playlist to the given path.
    ///
    /// Writes one canonical song rendering per line, newline after every
    /// entry including the last. The file handle closes on every exit
    /// path, including mid-write failures.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(playlist = %self.name, songs = self.songs.len(), "writing playlist export");

        let mut writer = BufWriter::new(File::create(path)?);
        for song in &self.songs {
            writeln!(writer, "{}", song)?;
        }
        writer.flush()?;

        println!("Playlist saved to {}", path.display());
        Ok(())
    }
}
