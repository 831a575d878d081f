//! `YouTube` Data API client for the chanpulse importer.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
