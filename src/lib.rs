//! TuneFinder Library
//!
//! Resolves spoken music commands to tracks in a local catalog.

pub mod config;
pub mod core;
pub mod error;
pub mod library;
pub mod music_handler;
pub mod players;
pub mod processor;
pub mod utils;

pub use library::{Catalog, CatalogEntry, LocalLibrary};
pub use music_handler::MusicHandler;
pub use processor::{resolve, MatchDecision, Resolver};
