// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Songs and their format rules.
//!
//! A song is an immutable record of title, artist, and duration, tagged
//! with the audio format it was validated against. The format carries the
//! suffix rule and the label used when the song plays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Audio format of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongFormat {
    /// MPEG layer 3
    Mp3,
    /// Waveform audio
    Wav,
}

impl SongFormat {
    /// Label printed when a song of this format plays
    pub fn label(self) -> &'static str {
        match self {
            SongFormat::Mp3 => "MP3",
            SongFormat::Wav => "WAV",
        }
    }

    /// Filename suffix this format requires
    pub fn suffix(self) -> &'static str {
        match self {
            SongFormat::Mp3 => ".mp3",
            SongFormat::Wav => ".wav",
        }
    }

    /// Check a title against this format's suffix rule.
    ///
    /// MP3 titles must carry the suffix in exact case; WAV accepts any
    /// casing.
    fn matches(self, title: &str) -> bool {
        match self {
            SongFormat::Mp3 => title.ends_with(".mp3"),
            SongFormat::Wav => title.to_ascii_lowercase().ends_with(".wav"),
        }
    }
}

/// A single track: created once, read-only thereafter
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    format: SongFormat,
    title: String,
    artist: String,
    duration_minutes: f64,
}

impl Song {
    /// Create a song, validating the title against the format's suffix rule.
    ///
    /// Attributes are stored verbatim; the duration is not validated (zero
    /// and negative values are accepted).
    pub fn new(
        format: SongFormat,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_minutes: f64,
    ) -> Result<Self> {
        let title = title.into();
        if !format.matches(&title) {
            return Err(Error::InvalidSongFormat(format.suffix()));
        }
        Ok(Self {
            format,
            title,
            artist: artist.into(),
            duration_minutes,
        })
    }

    /// Create an MP3 song
    pub fn mp3(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_minutes: f64,
    ) -> Result<Self> {
        Self::new(SongFormat::Mp3, title, artist, duration_minutes)
    }

    /// Create a WAV song
    pub fn wav(
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_minutes: f64,
    ) -> Result<Self> {
        Self::new(SongFormat::Wav, title, artist, duration_minutes)
    }

    /// Get the format
    pub fn format(&self) -> SongFormat {
        self.format
    }

    /// Get the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Get the duration in minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }

    /// Play the song, printing the playback line for its format
    pub fn play(&self) {
        println!("Playing {}: {}", self.format.label(), self);
    }
}

impl fmt::Display for Song {
    /// Canonical rendering: `<title> by <artist> (<duration> mins)`.
    ///
    /// Whole-number durations keep one decimal digit (`4.0`, not `4`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration_minutes.fract() == 0.0 {
            write!(
                f,
                "{} by {} ({:.1} mins)",
                self.title, self.artist, self.duration_minutes
            )
        } else {
            write!(
                f,
                "{} by {} ({} mins)",
                self.title, self.artist, self.duration_minutes
            )
        }
    }
}
