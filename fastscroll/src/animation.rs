use crate::AnimationState;

/// Reported by [`ShowHideAnimator::tick`] on genuine completion of a
/// fade. A cancelled fade never reports the end of the cancelled
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEnd {
    FadedIn,
    FadedOut,
}

/// One linear interpolation segment of the crossfade.
#[derive(Clone, Copy, Debug)]
struct Segment {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
}

impl Segment {
    fn sample(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}

/// The 4-phase show/hide crossfade: Out → FadingIn → In → FadingOut → Out.
///
/// Tick-driven: the driver (any frame callback or timer loop) calls
/// [`tick`](Self::tick) once per frame, and [`value`](Self::value) is the
/// interpolated alpha in `[0, 1]` consumed by rendering.
///
/// Cancel-safe: interrupting an in-flight fade retargets from the current
/// value, and the abandoned segment's completion is suppressed via
/// `was_cancelled` so state is never corrupted.
#[derive(Clone, Copy, Debug)]
pub struct ShowHideAnimator {
    state: AnimationState,
    value: f32,
    segment: Option<Segment>,
    was_cancelled: bool,
}

impl Default for ShowHideAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowHideAnimator {
    pub fn new() -> Self {
        Self {
            state: AnimationState::Out,
            value: 0.0,
            segment: None,
            was_cancelled: false,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current interpolated alpha in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Starts (or continues) fading in.
    ///
    /// If a fade-out is in flight it is cancelled in place and the fade-in
    /// starts from the animator's current value. A no-op while already
    /// FadingIn/In.
    pub fn show(&mut self, now_ms: u64, duration_ms: u64) {
        match self.state {
            AnimationState::FadingOut => {
                self.cancel();
                self.begin(AnimationState::FadingIn, 1.0, now_ms, duration_ms);
            }
            AnimationState::Out => {
                self.begin(AnimationState::FadingIn, 1.0, now_ms, duration_ms);
            }
            AnimationState::FadingIn | AnimationState::In => {}
        }
    }

    /// Starts (or continues) fading out; symmetric to [`show`](Self::show).
    ///
    /// `duration_ms == 0` completes on the next tick, which is how instant
    /// disappearance (e.g. on resize) is expressed.
    pub fn hide(&mut self, now_ms: u64, duration_ms: u64) {
        match self.state {
            AnimationState::FadingIn => {
                self.cancel();
                self.begin(AnimationState::FadingOut, 0.0, now_ms, duration_ms);
            }
            AnimationState::In => {
                self.begin(AnimationState::FadingOut, 0.0, now_ms, duration_ms);
            }
            AnimationState::FadingOut | AnimationState::Out => {}
        }
    }

    /// Cancels any in-flight fade, freezing the current value.
    ///
    /// Idempotent. The cancelled segment's end is never reported; a cancel
    /// is always followed by a new directive (or a reset).
    pub fn cancel(&mut self) {
        if self.segment.is_some() {
            self.was_cancelled = true;
        }
    }

    /// Drops back to Out with value 0 without reporting anything.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn begin(&mut self, state: AnimationState, to: f32, now_ms: u64, duration_ms: u64) {
        self.state = state;
        self.was_cancelled = false;
        self.segment = Some(Segment {
            from: self.value,
            to,
            start_ms: now_ms,
            duration_ms,
        });
    }

    /// Advances the interpolation by one driver tick.
    ///
    /// Returns the completion event when a fade genuinely finishes: at
    /// value 0 the scroller should go Hidden, at value 1 the state becomes
    /// In. Must tolerate being invoked at display refresh rate.
    pub fn tick(&mut self, now_ms: u64) -> Option<AnimationEnd> {
        let segment = self.segment?;

        if self.was_cancelled {
            // Cancel is always followed by a new directive, so don't
            // update state or report an end.
            self.was_cancelled = false;
            self.segment = None;
            return None;
        }

        self.value = segment.sample(now_ms);
        if !segment.is_done(now_ms) {
            return None;
        }

        self.segment = None;
        if self.value <= 0.0 {
            self.state = AnimationState::Out;
            Some(AnimationEnd::FadedOut)
        } else {
            self.state = AnimationState::In;
            Some(AnimationEnd::FadedIn)
        }
    }
}
