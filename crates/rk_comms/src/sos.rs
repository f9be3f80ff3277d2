//! SOS broadcast state controller
//!
//! Activation is gated behind a confirmation prompt; deactivation is
//! immediate. The active state changes presentation only. Nothing is
//! persisted or transmitted.

use serde::{Deserialize, Serialize};

/// Confirmation prompt title
pub const SOS_CONFIRM_TITLE: &str = "Emergency SOS";

/// Confirmation prompt body
pub const SOS_CONFIRM_BODY: &str =
    "This will broadcast your location and emergency status to all nearby devices. Continue?";

/// SOS controller states
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SosState {
    /// Not broadcasting
    #[default]
    Idle,
    /// Confirmation prompt is open
    Confirming,
    /// Broadcasting (presentation only)
    Active,
}

impl SosState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SosState::Idle => "idle",
            SosState::Confirming => "confirming",
            SosState::Active => "active",
        }
    }
}

/// Two-state toggle with a confirmation gate on the way up
#[derive(Debug, Clone, Copy, Default)]
pub struct SosController {
    state: SosState,
}

impl SosController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SosState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SosState::Active
    }

    /// Whether the confirmation prompt is open
    pub fn is_confirming(&self) -> bool {
        self.state == SosState::Confirming
    }

    /// Press the SOS control
    ///
    /// From idle this opens the confirmation prompt; while active it
    /// deactivates immediately with no prompt. Pressing while the prompt is
    /// already open does nothing.
    pub fn press(&mut self) -> SosState {
        self.state = match self.state {
            SosState::Idle => {
                tracing::debug!("sos confirmation prompt opened");
                SosState::Confirming
            }
            SosState::Confirming => SosState::Confirming,
            SosState::Active => {
                tracing::debug!("sos deactivated");
                SosState::Idle
            }
        };
        self.state
    }

    /// Confirm activation from the prompt; ignored in any other state
    pub fn confirm(&mut self) -> SosState {
        if self.state == SosState::Confirming {
            // Broadcasting to the mesh would start here
            tracing::debug!("sos activated");
            self.state = SosState::Active;
        }
        self.state
    }

    /// Dismiss the prompt without activating; ignored in any other state
    pub fn cancel(&mut self) -> SosState {
        if self.state == SosState::Confirming {
            tracing::debug!("sos activation cancelled");
            self.state = SosState::Idle;
        }
        self.state
    }

    /// Label on the SOS control
    pub fn button_label(&self) -> &'static str {
        if self.is_active() {
            "SOS ACTIVE"
        } else {
            "EMERGENCY SOS"
        }
    }

    /// Secondary hint under the control, shown while active
    pub fn hint(&self) -> Option<&'static str> {
        self.is_active().then_some("Press again to cancel")
    }

    /// Status line shown while active
    pub fn status_line(&self) -> Option<&'static str> {
        self.is_active()
            .then_some("Broadcasting your location to nearby devices")
    }
}
