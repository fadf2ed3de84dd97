use crate::catalog::Track;

/// Volume level, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    pub const MAX: u8 = 100;

    /// Clamps to `MAX`.
    pub fn new(level: u8) -> Self {
        Volume(level.min(Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(70)
    }
}

/// Which track is chosen and whether it is marked as playing.
///
/// Pure data structure: nothing here drives real audio output. `playing` is
/// not tied to `current` being set; `toggle_play` flips it either way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSelection {
    current: Option<Track>,
    playing: bool,
    volume: Volume,
}

impl PlaybackSelection {
    /// Initial selection for a freshly mounted view: first catalog entry, paused.
    pub fn new(first: Option<Track>) -> Self {
        Self {
            current: first,
            playing: false,
            volume: Volume::default(),
        }
    }

    /// Select `track` and mark it playing.
    ///
    /// Reselecting the current track never pauses it.
    pub fn select_track(&mut self, track: Track) {
        self.current = Some(track);
        self.playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_volume(&mut self, level: u8) {
        self.volume = Volume::new(level);
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Whether `track_id` is the selected track and marked playing
    pub fn is_playing_track(&self, track_id: i64) -> bool {
        self.playing && self.current.as_ref().is_some_and(|t| t.id == track_id)
    }
}
