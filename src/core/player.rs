use super::constants::{INTRO_BACKDROP_URL, STAGE_BACKDROP_URL};

/// Page background chosen by the splash state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backdrop {
    #[default]
    Intro,
    Stage,
    /// Pure black, shown after the player has been closed.
    Blank,
}

impl Backdrop {
    pub fn image_url(self) -> Option<&'static str> {
        match self {
            Backdrop::Intro => Some(INTRO_BACKDROP_URL),
            Backdrop::Stage => Some(STAGE_BACKDROP_URL),
            Backdrop::Blank => None,
        }
    }
}

/// Splash and playback state mirrored from the page's media element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub opened: bool,
    pub playing: bool,
    pub muted: bool,
    pub current_time_sec: f64,
    pub duration_sec: f64,
    pub backdrop: Backdrop,
}

impl PlayerState {
    /// Reveals the player. Returns true when playback should start.
    pub fn open(&mut self) -> bool {
        if self.opened {
            return false;
        }
        self.opened = true;
        self.backdrop = Backdrop::Stage;
        true
    }

    /// Hides the player; the caller pauses and rewinds the media element.
    pub fn close(&mut self) {
        self.opened = false;
        self.backdrop = Backdrop::Blank;
        self.playing = false;
        self.current_time_sec = 0.0;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn set_duration(&mut self, seconds: f64) {
        self.duration_sec = sanitize_time(seconds);
    }

    pub fn set_current_time(&mut self, seconds: f64) {
        self.current_time_sec = sanitize_time(seconds);
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration_sec > 0.0 {
            (self.current_time_sec / self.duration_sec * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Media time for a seek to `percent` of the track, once the duration is known.
    pub fn seek_target(&self, percent: f64) -> Option<f64> {
        if self.duration_sec > 0.0 && percent.is_finite() {
            Some(percent.clamp(0.0, 100.0) / 100.0 * self.duration_sec)
        } else {
            None
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.current_time_sec)
    }

    pub fn duration_label(&self) -> String {
        format_time(self.duration_sec)
    }
}

/// Formats seconds as `m:ss`; unknown or non-positive input reads "0:00".
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[inline]
fn sanitize_time(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
