//! Audio playback scoped to whatever section or exercise is on screen.
//!
//! The player itself belongs to the presentation layer. [`AudioSlot`] only
//! makes sure a clip is loaded while its section is current and stopped
//! (position back to the start) as soon as it is not, including on drop.

/// Playback backend provided by the UI.
pub trait AudioPlayer: Send {
    /// Prepare `url` for playback from the start.
    fn load(&mut self, url: &str);
    /// Pause, rewind and release the loaded clip.
    fn stop(&mut self);
}

/// Player that does nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAudio;

impl AudioPlayer for NoAudio {
    fn load(&mut self, _url: &str) {}
    fn stop(&mut self) {}
}

pub struct AudioSlot {
    player: Box<dyn AudioPlayer>,
    current: Option<String>,
}

impl AudioSlot {
    pub fn new(player: Box<dyn AudioPlayer>) -> Self {
        Self {
            player,
            current: None,
        }
    }

    /// Release whatever is loaded, then load `cue` if there is one.
    ///
    /// Always reloads, so calling it for the same clip rewinds it.
    pub fn acquire(&mut self, cue: Option<&str>) {
        self.release();
        if let Some(url) = cue {
            tracing::debug!("Audio acquired: {}", url);
            self.player.load(url);
            self.current = Some(url.to_string());
        }
    }

    pub fn release(&mut self) {
        if let Some(url) = self.current.take() {
            tracing::debug!("Audio released: {}", url);
            self.player.stop();
        }
    }

    /// Clip currently loaded.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Drop for AudioSlot {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for AudioSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSlot")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
