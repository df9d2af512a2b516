//! Horizontal "shake" used to draw attention to an invalid field.
//!
//! [`ShakeState`] owns one scalar position (the horizontal translation the UI
//! applies to the field) and knows how to animate it through a short
//! choreography. The animation is an async task; [`ShakeScope`] spawns it on
//! a tokio runtime and cancels it when the scope goes away. A cancelled shake
//! leaves the position wherever it got to.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Frames rendered per step of the choreography.
const FRAMES_PER_STEP: u32 = 4;

/// How many times the choreography repeats.
const REPETITIONS: usize = 3;

// ============================================================================
// STRENGTH / DIRECTION
// ============================================================================

/// Amplitude of the shake, in the UI's horizontal units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeStrength {
    /// 17 units.
    Normal,
    /// 40 units.
    Strong,
    /// Any other amplitude.
    Custom(f32),
}

impl ShakeStrength {
    /// Amplitude in units.
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::Normal => 17.0,
            Self::Strong => 40.0,
            Self::Custom(value) => value,
        }
    }
}

impl Default for ShakeStrength {
    fn default() -> Self {
        Self::Custom(20.0)
    }
}

/// Which way the field moves first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeDirection {
    /// Left and back.
    Left,
    /// Right and back.
    Right,
    /// Left, back, half-way right, back.
    #[default]
    LeftThenRight,
    /// Right, back, half-way left, back.
    RightThenLeft,
}

// ============================================================================
// SHAKE STATE
// ============================================================================

/// Animated horizontal offset of one field.
///
/// Safe to share between the UI thread and the animation task; the position
/// is stored atomically.
#[derive(Debug)]
pub struct ShakeState {
    strength: ShakeStrength,
    direction: ShakeDirection,
    position: AtomicU32,
}

impl ShakeState {
    /// A state at rest (position `0`).
    #[must_use]
    pub fn new(strength: ShakeStrength, direction: ShakeDirection) -> Self {
        Self {
            strength,
            direction,
            position: AtomicU32::new(0f32.to_bits()),
        }
    }

    /// Configured amplitude.
    #[must_use]
    pub const fn strength(&self) -> ShakeStrength {
        self.strength
    }

    /// Configured direction.
    #[must_use]
    pub const fn direction(&self) -> ShakeDirection {
        self.direction
    }

    /// Current horizontal offset.
    #[must_use]
    pub fn position(&self) -> f32 {
        f32::from_bits(self.position.load(Ordering::Relaxed))
    }

    fn set_position(&self, value: f32) {
        self.position.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Sequence of positions the field visits, rest excluded at the start.
    ///
    /// One excursion per direction, repeated three times.
    #[must_use]
    pub fn choreography(&self) -> Vec<f32> {
        let s = self.strength.value();
        let once: &[f32] = match self.direction {
            ShakeDirection::Left => &[-s, 0.0],
            ShakeDirection::Right => &[s, 0.0],
            ShakeDirection::LeftThenRight => &[-s, 0.0, s / 2.0, 0.0],
            ShakeDirection::RightThenLeft => &[s, 0.0, -s / 2.0, 0.0],
        };
        once.repeat(REPETITIONS)
    }

    /// Runs the full choreography, moving linearly between targets.
    ///
    /// Each target takes `step`. Dropping the future stops the animation in
    /// place.
    pub async fn shake(&self, step: Duration) {
        let frame = step / FRAMES_PER_STEP;
        for target in self.choreography() {
            let from = self.position();
            for i in 1..=FRAMES_PER_STEP {
                tokio::time::sleep(frame).await;
                let value = if i == FRAMES_PER_STEP {
                    target
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let t = i as f32 / FRAMES_PER_STEP as f32;
                    from + (target - from) * t
                };
                self.set_position(value);
            }
        }
    }
}

// ============================================================================
// SHAKE SCOPE
// ============================================================================

/// Runtime and cancellation scope for shake tasks.
///
/// Every task launched through a scope is cancelled when the scope is
/// cancelled or dropped. Child scopes are cancelled with their parent.
#[derive(Debug)]
pub struct ShakeScope {
    handle: Handle,
    token: CancellationToken,
}

impl ShakeScope {
    /// Scope spawning onto `handle`.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            token: CancellationToken::new(),
        }
    }

    /// Scope on the runtime the caller is running in, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }

    /// A scope on the same runtime, cancelled together with `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            token: self.token.child_token(),
        }
    }

    /// Cancels every task launched through this scope and its children.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// `true` once the scope was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Spawns `state.shake(step)` on the scope's runtime.
    pub fn launch(&self, state: Arc<ShakeState>, step: Duration) -> JoinHandle<()> {
        let token = self.token.clone();
        debug!(
            strength = state.strength().value(),
            direction = ?state.direction(),
            step_ms = step.as_millis(),
            "launching shake"
        );
        self.handle.spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {}
                () = state.shake(step) => {}
            }
        })
    }
}

impl Drop for ShakeScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

// ============================================================================
// TESTS
// ============================================================================
