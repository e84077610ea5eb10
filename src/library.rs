//! Local sound library: maps catalog resource locators to audio files on disk.

mod scan;

pub use scan::*;

#[cfg(test)]
mod tests;
