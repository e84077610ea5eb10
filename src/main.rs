//! Neural Waves: ambient sound player for the terminal.

mod app;
mod catalog;
mod config;
mod controller;
mod library;
mod mpris;
mod player;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
