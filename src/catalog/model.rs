//! Catalog model types: `Category`, `Track`, `TrackId` and `Catalog`.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use super::data::reference_tracks;
use crate::controller::format_clock;

/// Content grouping a track belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Focus,
    Relax,
    DeepSleep,
}

impl Category {
    /// Every category, in browsing order.
    pub const ALL: [Category; 3] = [Category::Focus, Category::Relax, Category::DeepSleep];

    pub fn name(self) -> &'static str {
        match self {
            Category::Focus => "Focus",
            Category::Relax => "Relax",
            Category::DeepSleep => "Deep Sleep",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Focus => "Enhance concentration and productivity",
            Category::Relax => "Unwind and reduce stress",
            Category::DeepSleep => "Promote restful sleep",
        }
    }

    /// Glyph shown next to the category name.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Focus => "◉",
            Category::Relax => "❦",
            Category::DeepSleep => "☾",
        }
    }

    /// Name of the accent colour used when rendering the category.
    pub fn color(self) -> &'static str {
        match self {
            Category::Focus => "blue",
            Category::Relax => "green",
            Category::DeepSleep => "purple",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identifier of a catalog track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub &'static str);

impl TrackId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A playable catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: &'static str,
    pub artist: &'static str,
    pub category: Category,
    pub duration: Duration,
    /// Locator of the audio resource, resolved by the sound library.
    pub resource: &'static str,
    pub artwork: Option<&'static str>,
}

impl Track {
    /// Nominal length rendered as `m:ss`.
    pub fn formatted_duration(&self) -> String {
        format_clock(self.duration)
    }
}

/// The read-only list of tracks the player knows about.
#[derive(Debug)]
pub struct Catalog {
    tracks: Vec<Track>,
}

static REFERENCE: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(reference_tracks()));

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The built-in nine-track catalog.
    pub fn reference() -> &'static Catalog {
        &REFERENCE
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Look a track up by its textual id (as it appears in config or on D-Bus).
    pub fn find(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id.as_str() == id)
    }

    /// Tracks of `category`, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.category == category)
    }
}
