// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for mixtape
//!
//! These tests verify that users, playlists, playback, shuffling, and
//! file export work together correctly.

use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mixtape::config::LibraryFile;
use mixtape::{Error, Playlist, Song, User};

/// Test the full demo scenario: create, add, play, shuffle, repeat, save
#[test]
fn test_full_scenario_pipeline() {
    let dir = tempfile::tempdir().unwrap();

    let mut user = User::new("Pradeep Kumar");
    let playlist = user.create_playlist("Rockhits");

    playlist.add_song(Song::mp3("song1.mp3", "Artist A", 3.5).unwrap());
    playlist.add_song(Song::wav("song2.wav", "Artist B", 4.0).unwrap());
    playlist.add_song(Song::mp3("song3.mp3", "Artist C", 2.8).unwrap());

    playlist.play_all().unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    playlist.shuffle(&mut rng).unwrap();
    playlist.repeat_all().unwrap();

    let path = dir.path().join("Rockhits.txt");
    playlist.save_to_path(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);

    // Whatever order the shuffle left behind is the order on disk
    let expected: Vec<String> = playlist.songs().iter().map(|s| s.to_string()).collect();
    assert_eq!(lines, expected);

    // The multiset of songs survives the shuffle
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        vec![
            "song1.mp3 by Artist A (3.5 mins)",
            "song2.wav by Artist B (4.0 mins)",
            "song3.mp3 by Artist C (2.8 mins)",
        ]
    );
}

/// Test that an unshuffled export matches the insertion order exactly
#[test]
fn test_export_matches_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Rockhits.txt");

    let mut user = User::new("Pradeep Kumar");
    let playlist = user.create_playlist("Rockhits");
    playlist.add_song(Song::mp3("song1.mp3", "Artist A", 3.5).unwrap());
    playlist.add_song(Song::wav("song2.wav", "Artist B", 4.0).unwrap());
    playlist.add_song(Song::mp3("song3.mp3", "Artist C", 2.8).unwrap());

    playlist.save_to_path(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "song1.mp3 by Artist A (3.5 mins)\n\
         song2.wav by Artist B (4.0 mins)\n\
         song3.mp3 by Artist C (2.8 mins)\n"
    );
}

/// Test driving the scenario from a YAML library file
#[test]
fn test_library_file_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let library_path = dir.path().join("library.yaml");

    fs::write(
        &library_path,
        r#"
user: "Pradeep Kumar"
playlists:
  - name: "Rockhits"
    songs:
      - format: mp3
        title: "song1.mp3"
        artist: "Artist A"
        duration: 3.5
      - format: wav
        title: "song2.wav"
        artist: "Artist B"
        duration: 4.0
"#,
    )
    .unwrap();

    let library = LibraryFile::load(&library_path).unwrap();
    let mut user = library.build_user().unwrap();
    assert_eq!(user.username(), "Pradeep Kumar");
    assert_eq!(user.playlists().len(), 1);

    let playlist = &mut user.playlists_mut()[0];
    playlist.play_all().unwrap();

    let export_path = dir.path().join("Rockhits.txt");
    playlist.save_to_path(&export_path).unwrap();

    assert_eq!(
        fs::read_to_string(&export_path).unwrap(),
        "song1.mp3 by Artist A (3.5 mins)\n\
         song2.wav by Artist B (4.0 mins)\n"
    );
}

/// Test that every play operation rejects an empty playlist
#[test]
fn test_empty_playlist_operations_fail() {
    let mut playlist = Playlist::new("Empty");
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(playlist.play_all(), Err(Error::PlaylistEmpty)));
    assert!(matches!(playlist.shuffle(&mut rng), Err(Error::PlaylistEmpty)));
    assert!(matches!(playlist.repeat_all(), Err(Error::PlaylistEmpty)));
}

/// Test that the format suffix asymmetry holds through the public API
#[test]
fn test_format_case_asymmetry() {
    assert!(Song::mp3("track.MP3", "Artist", 1.0).is_err());
    assert!(Song::wav("track.WAV", "Artist", 1.0).is_ok());
}
