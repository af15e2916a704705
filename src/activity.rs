//! Activity
//!
//! Health and pedometer readings arrive from platform collaborators that need
//! the user's permission first. [`SensorState`] makes that lifecycle explicit:
//! every reading passes through an authorization step, and transitions that
//! skip a step are rejected.

use thiserror::Error;
use tracing::debug;

const TAGLINE: &str = "Let's burn more calories, but not your wallet.";

/// Estimated kilocalories burned per step.
pub const CALORIES_PER_STEP: f64 = 0.045;

/// Sensor state machine errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SensorError {
    /// The event is not valid in the current state.
    #[error("cannot apply {event} while {state}")]
    InvalidTransition {
        /// State the event was applied to
        state: &'static str,

        /// Rejected event
        event: &'static str,
    },
}

/// Lifecycle of a permission-gated sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorState<T> {
    /// Permission has not been asked for.
    Unrequested,

    /// Waiting for the user to answer the permission prompt.
    Requested,

    /// Permission granted, no reading yet.
    Granted,

    /// Permission refused.
    Denied,

    /// Latest reading.
    DataAvailable(T),

    /// The sensor failed.
    Error(String),
}

/// Input to [`SensorState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent<T> {
    /// Ask the user for permission.
    RequestAuthorization,

    /// The user granted permission.
    Granted,

    /// The user refused permission.
    Denied,

    /// A new reading arrived.
    Data(T),

    /// The sensor reported an error.
    Failed(String),
}

impl<T> SensorEvent<T> {
    fn name(&self) -> &'static str {
        match self {
            SensorEvent::RequestAuthorization => "request_authorization",
            SensorEvent::Granted => "granted",
            SensorEvent::Denied => "denied",
            SensorEvent::Data(_) => "data",
            SensorEvent::Failed(_) => "failed",
        }
    }
}

impl<T> Default for SensorState<T> {
    fn default() -> Self {
        SensorState::Unrequested
    }
}

impl<T> SensorState<T> {
    /// Short state name, used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            SensorState::Unrequested => "unrequested",
            SensorState::Requested => "requested",
            SensorState::Granted => "granted",
            SensorState::Denied => "denied",
            SensorState::DataAvailable(_) => "data_available",
            SensorState::Error(_) => "error",
        }
    }

    /// Advance the state machine.
    ///
    /// Authorization can be requested again after a denial or an error.
    /// Readings replace earlier readings.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::InvalidTransition`] when `event` is not valid in
    /// the current state.
    pub fn apply(self, event: SensorEvent<T>) -> Result<Self, SensorError> {
        let state = self.name();
        let event_name = event.name();

        let next = match (self, event) {
            (
                SensorState::Unrequested | SensorState::Denied | SensorState::Error(_),
                SensorEvent::RequestAuthorization,
            ) => SensorState::Requested,
            (SensorState::Requested, SensorEvent::Granted) => SensorState::Granted,
            (SensorState::Requested, SensorEvent::Denied) => SensorState::Denied,
            (SensorState::Granted | SensorState::DataAvailable(_), SensorEvent::Data(value)) => {
                SensorState::DataAvailable(value)
            }
            (
                SensorState::Requested | SensorState::Granted | SensorState::DataAvailable(_),
                SensorEvent::Failed(message),
            ) => SensorState::Error(message),
            _ => {
                return Err(SensorError::InvalidTransition {
                    state,
                    event: event_name,
                });
            }
        };

        debug!(from = state, event = event_name, to = next.name(), "sensor transition");

        Ok(next)
    }

    /// The latest reading, if one is available.
    pub fn current(&self) -> Option<&T> {
        match self {
            SensorState::DataAvailable(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the permission prompt is still unanswered.
    pub fn is_loading(&self) -> bool {
        matches!(self, SensorState::Requested)
    }
}

/// Today's activity totals from the health store.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivitySnapshot {
    /// Steps walked
    pub steps: f64,

    /// Active kilocalories burned
    pub calories: f64,
}

impl ActivitySnapshot {
    /// Create a snapshot.
    pub const fn new(steps: f64, calories: f64) -> Self {
        Self { steps, calories }
    }

    /// Markdown summary for the homepage, with the savings tagline on a
    /// second line.
    pub fn summary(&self) -> String {
        format!(
            "You've burned **{:.0} calories** in **{:.0} steps**.\n{TAGLINE}",
            self.calories, self.steps
        )
    }
}

/// Homepage greeting for the current health data state.
///
/// Once access is granted the summary is shown, with zero totals until the
/// first reading arrives.
pub fn welcome_message(state: &SensorState<ActivitySnapshot>) -> String {
    match state {
        SensorState::DataAvailable(snapshot) => snapshot.summary(),
        SensorState::Granted => ActivitySnapshot::default().summary(),
        SensorState::Requested => "Loading your activity...".to_string(),
        SensorState::Unrequested | SensorState::Denied | SensorState::Error(_) => {
            "Connect your health data to see how much your coffee walks burn.".to_string()
        }
    }
}

/// Steps walked since a session started, from cumulative pedometer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkSession {
    steps: u64,
    active: bool,
}

impl WalkSession {
    /// Start a fresh session.
    pub fn start() -> Self {
        debug!("walk session started");

        Self {
            steps: 0,
            active: true,
        }
    }

    /// Record the pedometer's cumulative count since the session began.
    ///
    /// Readings after [`WalkSession::stop`] are ignored.
    pub fn record(&mut self, steps_since_start: u64) {
        if self.active {
            self.steps = steps_since_start;
        }
    }

    /// Stop accepting readings.
    pub fn stop(&mut self) {
        self.active = false;

        debug!(steps = self.steps, "walk session stopped");
    }

    /// Clear the count, keeping the session state.
    pub fn reset(&mut self) {
        self.steps = 0;
    }

    /// Whether the session is accepting readings.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Steps since the session started.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Estimated kilocalories burned this session.
    #[expect(
        clippy::cast_precision_loss,
        reason = "session step counts are far below 2^52"
    )]
    pub fn calories(&self) -> f64 {
        self.steps as f64 * CALORIES_PER_STEP
    }
}
