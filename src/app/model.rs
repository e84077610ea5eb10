//! Application model types: `App` and `Screen`.
//!
//! The `App` struct holds what the screens need beyond the playback
//! controller: which screen is shown, cursors, the timer preset picker and
//! the last status message.

use crate::catalog::{Catalog, Category, Track};

/// The three screens of the TUI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    /// Category browser.
    #[default]
    Categories,
    /// Now playing, playback mode and timer.
    Player,
    /// Saved tracks.
    Saved,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Categories, Screen::Player, Screen::Saved];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Categories => "Categories",
            Screen::Player => "Player",
            Screen::Saved => "Saved",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Categories => 0,
            Screen::Player => 1,
            Screen::Saved => 2,
        }
    }

    /// Cycle `Categories -> Player -> Saved -> Categories`.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// The main application model.
pub struct App {
    pub screen: Screen,
    /// Index into `Category::ALL`.
    pub category: usize,
    /// Cursor within the tracks of the highlighted category.
    pub track_cursor: usize,
    /// Cursor within the saved list.
    pub saved_cursor: usize,

    /// Timer lengths offered on the player screen (minutes).
    pub timer_presets: Vec<u64>,
    pub preset_index: usize,

    /// Last message worth showing the user (errors, confirmations).
    pub status: Option<String>,
}

impl App {
    /// Create a new `App` starting on `screen` and offering `timer_presets`.
    pub fn new(screen: Screen, timer_presets: Vec<u64>) -> Self {
        Self {
            screen,
            category: 0,
            track_cursor: 0,
            saved_cursor: 0,
            timer_presets,
            preset_index: 0,
            status: None,
        }
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    pub fn selected_category(&self) -> Category {
        Category::ALL[self.category % Category::ALL.len()]
    }

    /// Move to the next category (wrapping) and reset the track cursor.
    pub fn next_category(&mut self) {
        self.category = (self.category + 1) % Category::ALL.len();
        self.track_cursor = 0;
    }

    /// Move to the previous category (wrapping) and reset the track cursor.
    pub fn prev_category(&mut self) {
        self.category = (self.category + Category::ALL.len() - 1) % Category::ALL.len();
        self.track_cursor = 0;
    }

    /// Tracks shown for the highlighted category.
    pub fn category_tracks(&self, catalog: &'static Catalog) -> Vec<&'static Track> {
        catalog.by_category(self.selected_category()).collect()
    }

    /// The track under the cursor on the categories screen.
    pub fn highlighted_track(&self, catalog: &'static Catalog) -> Option<&'static Track> {
        self.category_tracks(catalog).get(self.track_cursor).copied()
    }

    /// The track under the cursor on the saved screen.
    pub fn highlighted_saved(&self, saved: &[&'static Track]) -> Option<&'static Track> {
        saved.get(self.saved_cursor).copied()
    }

    /// Move the cursor of the current list down, wrapping at `len`.
    pub fn cursor_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1) % len;
    }

    /// Move the cursor of the current list up, wrapping at `len`.
    pub fn cursor_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = if *cursor == 0 { len - 1 } else { (*cursor - 1).min(len - 1) };
    }

    /// Keep the saved cursor inside a list that may have shrunk.
    pub fn clamp_saved_cursor(&mut self, len: usize) {
        if len == 0 {
            self.saved_cursor = 0;
        } else if self.saved_cursor >= len {
            self.saved_cursor = len - 1;
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.screen {
            Screen::Saved => &mut self.saved_cursor,
            Screen::Categories | Screen::Player => &mut self.track_cursor,
        }
    }

    /// Timer length currently picked (minutes).
    pub fn preset_minutes(&self) -> Option<u64> {
        self.timer_presets.get(self.preset_index).copied()
    }

    /// Select the preset equal to `minutes` if offered.
    pub fn select_preset(&mut self, minutes: u64) {
        if let Some(i) = self.timer_presets.iter().position(|&m| m == minutes) {
            self.preset_index = i;
        }
    }

    pub fn next_preset(&mut self) {
        if !self.timer_presets.is_empty() {
            self.preset_index = (self.preset_index + 1) % self.timer_presets.len();
        }
    }

    pub fn prev_preset(&mut self) {
        if !self.timer_presets.is_empty() {
            let len = self.timer_presets.len();
            self.preset_index = (self.preset_index + len - 1) % len;
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
