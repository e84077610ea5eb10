use std::time::Duration;

use super::model::{Category, Track, TrackId};

const fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

fn track(
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    category: Category,
    duration: Duration,
    resource: &'static str,
) -> Track {
    Track {
        id: TrackId(id),
        title,
        artist,
        category,
        duration,
        resource,
        artwork: None,
    }
}

pub(super) fn reference_tracks() -> Vec<Track> {
    use Category::*;

    vec![
        track("focus-deep-focus-flow", "Deep Focus Flow", "Neural Waves", Focus, minutes(30), "focus1.wav"),
        track("focus-concentration-boost", "Concentration Boost", "Mind Sync", Focus, minutes(40), "focus2.wav"),
        track("focus-alpha-waves", "Alpha Waves", "Brain Tune", Focus, minutes(60), "focus3.wav"),
        track("relax-ocean-breeze", "Ocean Breeze", "Calm Sounds", Relax, minutes(20), "relax1.wav"),
        track("relax-forest-meditation", "Forest Meditation", "Nature Harmony", Relax, minutes(30), "relax2.wav"),
        track("relax-peaceful-mind", "Peaceful Mind", "Zen Master", Relax, minutes(45), "relax3.wav"),
        track("sleep-delta-dreams", "Delta Dreams", "Sleep Lab", DeepSleep, minutes(60), "sleep1.wav"),
        track("sleep-night-whispers", "Night Whispers", "Dream Weaver", DeepSleep, minutes(80), "sleep2.wav"),
        track("sleep-theta-healing", "Theta Healing", "Sleep Therapy", DeepSleep, minutes(90), "sleep3.wav"),
    ]
}
