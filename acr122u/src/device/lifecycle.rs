// acr122u/src/device/lifecycle.rs

use crate::types::StatusBits;

/// Card state of a single reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReaderState {
    /// No card connected.
    #[default]
    Idle,
    Connecting,
    Connected,
    Disconnecting,
    /// Terminal: the reader went away.
    Ended,
}

/// What the driver has to do after a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a shared connection to the inserted card.
    Connect,
    /// Release the card that was removed.
    Disconnect,
    /// Report a removal without a connection to release.
    ReportRemoved,
}

/// Reader/card state machine without any I/O.
///
/// Status changes are detected on the bits that became set since the
/// previous notification: `EMPTY` is checked first, then `PRESENT`. Bits
/// that turn off never trigger anything.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: ReaderState,
    previous: StatusBits,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Status bits of the last notification seen.
    pub fn previous_status(&self) -> StatusBits {
        self.previous
    }

    /// Feed a status notification and return the action it calls for.
    pub fn on_status(&mut self, status: StatusBits) -> Option<Action> {
        if self.state == ReaderState::Ended {
            return None;
        }
        let changes = status.newly_set(self.previous);
        self.previous = status;

        if changes.contains(StatusBits::EMPTY) {
            match self.state {
                ReaderState::Connected => {
                    self.state = ReaderState::Disconnecting;
                    Some(Action::Disconnect)
                }
                ReaderState::Idle => Some(Action::ReportRemoved),
                _ => None,
            }
        } else if changes.contains(StatusBits::PRESENT) {
            match self.state {
                ReaderState::Idle => {
                    self.state = ReaderState::Connecting;
                    Some(Action::Connect)
                }
                _ => None,
            }
        } else {
            None
        }
    }

    pub fn connect_succeeded(&mut self) {
        if self.state == ReaderState::Connecting {
            self.state = ReaderState::Connected;
        }
    }

    pub fn connect_failed(&mut self) {
        if self.state == ReaderState::Connecting {
            self.state = ReaderState::Idle;
        }
    }

    /// Disconnect completed, successfully or not; the card is gone either way.
    pub fn disconnect_finished(&mut self) {
        if self.state == ReaderState::Disconnecting {
            self.state = ReaderState::Idle;
        }
    }

    pub fn end(&mut self) {
        self.state = ReaderState::Ended;
    }

    pub fn is_ended(&self) -> bool {
        self.state == ReaderState::Ended
    }
}
