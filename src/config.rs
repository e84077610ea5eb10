//! Configuration loader and schema types.
//!
//! Settings come from an optional TOML file overlaid with `NEURALWAVES__*`
//! environment variables. Anything missing falls back to the defaults in
//! `schema`.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
