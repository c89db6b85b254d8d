//! Socket connection drivers with state tracking and auto-reconnect.
//!
//! A driver owns the outbound queue for the lifetime of the connection and
//! reports everything it learns (state changes, decoded server events) on
//! the inbound channel. The UI side consumes that channel on its own thread,
//! so drivers never touch reactive state directly.

use futures_channel::mpsc::{UnboundedReceiver, UnboundedSender};
use wishlist_shared::{ClientEvent, ServerEvent};

/// Connection state for the socket
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub fn is_connecting(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting | ConnectionState::Reconnecting { .. }
        )
    }

    pub fn label(&self) -> String {
        match self {
            ConnectionState::Disconnected => "disconnected".to_string(),
            ConnectionState::Connecting => "connecting".to_string(),
            ConnectionState::Connected => "connected".to_string(),
            ConnectionState::Reconnecting { attempt } => format!("reconnecting (attempt {attempt})"),
            ConnectionState::Failed { reason } => format!("failed: {reason}"),
        }
    }
}

/// Configuration for auto-reconnect behavior
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Maximum number of reconnect attempts (0 = infinite)
    pub max_attempts: u32,
    /// Initial delay in milliseconds
    pub initial_delay_ms: u32,
    /// Maximum delay in milliseconds
    pub max_delay_ms: u32,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            backoff_multiplier: 1.5,
        }
    }
}

impl ReconnectConfig {
    /// Calculate delay for a given attempt number
    pub fn delay_for_attempt(&self, attempt: u32) -> u32 {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay = self.initial_delay_ms as f32 * self.backoff_multiplier.powi(exponent);
        if delay.is_finite() && delay < self.max_delay_ms as f32 {
            delay as u32
        } else {
            self.max_delay_ms
        }
    }

    pub fn exhausted(&self, attempt: u32) -> bool {
        self.max_attempts > 0 && attempt >= self.max_attempts
    }
}

/// What a driver reports back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    State(ConnectionState),
    Event(ServerEvent),
}

pub(crate) type OutboundReceiver = UnboundedReceiver<ClientEvent>;
pub(crate) type InboundSender = UnboundedSender<Inbound>;

// Include platform-specific implementation
#[cfg(target_arch = "wasm32")]
mod connection_wasm;
#[cfg(target_arch = "wasm32")]
pub(crate) use connection_wasm::spawn_connection;

#[cfg(not(target_arch = "wasm32"))]
mod connection_native;
#[cfg(not(target_arch = "wasm32"))]
pub(crate) use connection_native::spawn_connection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_and_caps() {
        let config = ReconnectConfig::default();
        assert_eq!(config.delay_for_attempt(0), 1000);
        assert_eq!(config.delay_for_attempt(1), 1500);
        assert_eq!(config.delay_for_attempt(2), 2250);
        assert_eq!(config.delay_for_attempt(20), 30000);
        assert_eq!(config.delay_for_attempt(u32::MAX), 30000);
    }

    #[test]
    fn default_config_never_gives_up() {
        let config = ReconnectConfig::default();
        assert!(!config.exhausted(10));
        assert!(!config.exhausted(u32::MAX));
    }

    #[test]
    fn bounded_config_gives_up_after_max_attempts() {
        let config = ReconnectConfig {
            max_attempts: 10,
            ..ReconnectConfig::default()
        };
        assert!(!config.exhausted(9));
        assert!(config.exhausted(10));
    }

    #[test]
    fn state_predicates() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(ConnectionState::Reconnecting { attempt: 2 }.is_connecting());
        assert_eq!(
            ConnectionState::Reconnecting { attempt: 2 }.label(),
            "reconnecting (attempt 2)"
        );
    }
}
