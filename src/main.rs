// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use mixtape::config::LibraryFile;
use mixtape::{Song, User};

fn print_usage() {
    println!("MIXTAPE - Personal Music Playlist Manager");
    println!();
    println!("Usage: mixtape [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed <N>              Run the demo scenario with a fixed shuffle seed");
    println!("  --library <FILE> [SEED] Run the scenario from a YAML library file");
    println!("  --help                  Show this help message");
    println!();
    println!("With no options, the built-in demo scenario runs.");
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fixed demo scenario: one user, one playlist, three songs
fn run_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);

    let mut user = User::new("Pradeep Kumar");
    let playlist = user.create_playlist("Rockhits");

    playlist.add_song(Song::mp3("song1.mp3", "Artist A", 3.5)?);
    playlist.add_song(Song::wav("song2.wav", "Artist B", 4.0)?);
    playlist.add_song(Song::mp3("song3.mp3", "Artist C", 2.8)?);

    println!();
    println!("--- Playing All Songs ---");
    playlist.play_all()?;

    println!();
    println!("--- Shuffle Playlist ---");
    playlist.shuffle(&mut rng)?;

    println!();
    println!("--- Repeat Playlist ---");
    playlist.repeat_all()?;

    playlist.save_to_file()?;

    Ok(())
}

/// Run the demo operation sequence over every playlist in a library file
fn run_library(path: &str, seed: Option<u64>) -> Result<()> {
    let library = LibraryFile::load(path)?;
    let mut rng = make_rng(seed);
    let mut user = library.build_user()?;

    for playlist in user.playlists_mut() {
        println!();
        println!("--- Playing All Songs ---");
        playlist.play_all()?;

        println!();
        println!("--- Shuffle Playlist ---");
        playlist.shuffle(&mut rng)?;

        println!();
        println!("--- Repeat Playlist ---");
        playlist.repeat_all()?;

        playlist.save_to_file()?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let outcome = match args.get(1).map(String::as_str) {
        None => run_demo(None),
        Some("--help") | Some("-h") => {
            print_usage();
            return;
        }
        Some("--seed") => {
            if args.len() < 3 {
                eprintln!("Error: --seed requires a number");
                std::process::exit(1);
            }
            match args[2].parse::<u64>() {
                Ok(seed) => run_demo(Some(seed)),
                Err(_) => {
                    eprintln!("Error: invalid seed: {}", args[2]);
                    std::process::exit(1);
                }
            }
        }
        Some("--library") => {
            if args.len() < 3 {
                eprintln!("Error: --library requires a file path");
                std::process::exit(1);
            }
            let seed = match args.get(3) {
                Some(raw) => match raw.parse::<u64>() {
                    Ok(seed) => Some(seed),
                    Err(_) => {
                        eprintln!("Error: invalid seed: {}", raw);
                        std::process::exit(1);
                    }
                },
                None => None,
            };
            run_library(&args[2], seed)
        }
        Some(other) => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    };

    // Scenario failures are reported, not fatal; the process exits normally.
    if let Err(err) = outcome {
        println!("Error: {}", err);
    }
}
