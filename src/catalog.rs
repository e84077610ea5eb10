//! Track catalog: the fixed reference data set the player offers.
//!
//! Tracks are grouped into three categories, three tracks each. The catalog is
//! immutable for the whole process, so it is built once and handed out as a
//! `&'static Catalog`.

mod data;
mod model;

pub use model::*;
