use std::time::Duration;

pub const DEFAULT_SPEED: Duration = Duration::from_millis(200);

/// Cursor over a precomputed step sequence.
///
/// Holds no timer. Whoever drives the animation calls [`Playback::tick`] once
/// every [`Playback::speed`] while [`Playback::is_playing`] is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    current_step: usize,
    is_playing: bool,
    speed: Duration,
    total_steps: usize,
}

impl Playback {
    pub fn new(total_steps: usize, speed: Duration) -> Self {
        Self {
            current_step: 0,
            is_playing: false,
            speed,
            total_steps,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_at_end(&self) -> bool {
        self.current_step >= self.last_step()
    }

    /// Starts playing, rewinding first if already on the last step.
    pub fn play(&mut self) {
        if self.is_at_end() {
            self.current_step = 0;
        }
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn step_forward(&mut self) {
        self.is_playing = false;
        self.current_step = (self.current_step + 1).min(self.last_step());
    }

    pub fn step_backward(&mut self) {
        self.is_playing = false;
        self.current_step = self.current_step.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.is_playing = false;
        self.current_step = 0;
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Moves to `step`, clamped to the sequence. Leaves play state alone.
    pub fn jump_to(&mut self, step: usize) {
        self.current_step = step.min(self.last_step());
    }

    pub fn set_total_steps(&mut self, total_steps: usize) {
        self.total_steps = total_steps;
        self.current_step = self.current_step.min(self.last_step());
    }

    /// Advances one step while playing. Reaching the end stops playback.
    /// Returns whether the cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        if self.is_at_end() {
            self.is_playing = false;
            return false;
        }
        self.current_step += 1;
        true
    }

    fn last_step(&self) -> usize {
        self.total_steps.saturating_sub(1)
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(0, DEFAULT_SPEED)
    }
}
