// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for mixtape.

/// Errors surfaced by song construction and playlist operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Song title does not carry the suffix its format requires
    #[error("Song must be in {0} format!")]
    InvalidSongFormat(&'static str),

    /// Play, shuffle, or repeat attempted on a playlist with no songs
    #[error("Playlist is Empty!")]
    PlaylistEmpty,

    /// Export file could not be created or written
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Specialized Result type for mixtape operations
pub type Result<T> = std::result::Result<T, Error>;
