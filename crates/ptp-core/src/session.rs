//! Session state machine.
//!
//! One [`SessionManager`] per device handle owns the session identity, the
//! nesting depth and the transaction counter. It performs no I/O: the device
//! asks it what to put on the wire and reports the outcome back.
//!
//! ```text
//! Closed --open--> Opening --ok--> Open(1) --open--> Open(2) ...
//! Open(n>1) --close--> Open(n-1)
//! Open(1) --close--> Closing --any--> Closed
//! ```

use std::fmt;

use crate::error::{PtpError, Result};
use crate::protocol::OperationCode;
use crate::protocol::constants::{
    DEFAULT_SESSION_ID, FIRST_TRANSACTION_ID, LAST_TRANSACTION_ID, NO_TRANSACTION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Opening,
    Open { depth: usize },
    Closing,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Closed => write!(f, "CLOSED"),
            SessionState::Opening => write!(f, "OPENING"),
            SessionState::Open { depth } => write!(f, "OPEN({})", depth),
            SessionState::Closing => write!(f, "CLOSING"),
        }
    }
}

/// How OpenSession picks its session ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIdPolicy {
    /// Start at `first` and advance on every device-level open.
    Incrementing { first: u32 },
    /// Always use the same ID.
    Fixed(u32),
}

impl Default for SessionIdPolicy {
    fn default() -> Self {
        SessionIdPolicy::Incrementing {
            first: DEFAULT_SESSION_ID,
        }
    }
}

/// What `begin_open` asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStep {
    /// Send OpenSession with this ID, then call `finish_open`.
    Send { session_id: u32 },
    /// Joined the open session. No device traffic.
    Nested { generation: u64 },
}

/// What `begin_close` asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseStep {
    /// Send CloseSession with this transaction ID, then call `finish_close`.
    Send { transaction_id: u32 },
    /// Depth decremented. No device traffic.
    Nested { depth: usize },
    /// The scope belongs to a session that no longer exists.
    Stale,
}

#[derive(Debug)]
pub struct SessionManager {
    state: SessionState,
    policy: SessionIdPolicy,
    next_session_id: u32,
    session_id: Option<u32>,
    /// Last transaction ID handed out; 0 before the first.
    transaction_id: u32,
    /// Bumped on every device-level open so scopes of an earlier session
    /// cannot unwind a later one.
    generation: u64,
}

impl SessionManager {
    pub fn new(policy: SessionIdPolicy) -> Self {
        let next_session_id = match policy {
            SessionIdPolicy::Incrementing { first } => first.max(1),
            SessionIdPolicy::Fixed(id) => id,
        };
        Self {
            state: SessionState::Closed,
            policy,
            next_session_id,
            session_id: None,
            transaction_id: NO_TRANSACTION,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    pub fn depth(&self) -> usize {
        match self.state {
            SessionState::Open { depth } => depth,
            _ => 0,
        }
    }

    pub fn session_id(&self) -> Option<u32> {
        self.session_id
    }

    /// Last transaction ID used in the current session.
    pub fn transaction_id(&self) -> u32 {
        self.transaction_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Enter a session scope.
    pub fn begin_open(&mut self) -> Result<OpenStep> {
        match self.state {
            SessionState::Closed => {
                self.state = SessionState::Opening;
                Ok(OpenStep::Send {
                    session_id: self.next_session_id,
                })
            }
            SessionState::Open { depth } => {
                self.state = SessionState::Open { depth: depth + 1 };
                Ok(OpenStep::Nested {
                    generation: self.generation,
                })
            }
            other => Err(PtpError::InvalidSessionState {
                state: other.to_string(),
                action: "open",
            }),
        }
    }

    /// Record the OpenSession outcome. Returns the new generation on success.
    pub fn finish_open(&mut self, session_id: u32, ok: bool) -> Option<u64> {
        if self.state != SessionState::Opening {
            return None;
        }
        if !ok {
            self.state = SessionState::Closed;
            return None;
        }
        self.state = SessionState::Open { depth: 1 };
        self.session_id = Some(session_id);
        self.transaction_id = NO_TRANSACTION;
        self.generation += 1;
        if let SessionIdPolicy::Incrementing { .. } = self.policy {
            self.next_session_id = match session_id.wrapping_add(1) {
                0 => 1,
                next => next,
            };
        }
        Some(self.generation)
    }

    /// Leave a session scope opened in `generation`.
    pub fn begin_close(&mut self, generation: u64) -> Result<CloseStep> {
        if generation != self.generation {
            return Ok(CloseStep::Stale);
        }
        match self.state {
            SessionState::Open { depth } if depth > 1 => {
                self.state = SessionState::Open { depth: depth - 1 };
                Ok(CloseStep::Nested { depth: depth - 1 })
            }
            SessionState::Open { .. } => {
                self.state = SessionState::Closing;
                let transaction_id = self.advance();
                Ok(CloseStep::Send { transaction_id })
            }
            SessionState::Closed => Ok(CloseStep::Stale),
            other => Err(PtpError::InvalidSessionState {
                state: other.to_string(),
                action: "close",
            }),
        }
    }

    /// CloseSession finished, whatever its outcome.
    pub fn finish_close(&mut self) {
        self.reset();
    }

    /// The device dropped the session on its own (ResetDevice, PowerDown).
    pub fn mark_closed_by_device(&mut self) {
        self.abandon();
    }

    /// Forget the session without a device-level close. Outstanding scopes
    /// become stale.
    pub fn abandon(&mut self) {
        self.reset();
        self.generation += 1;
    }

    /// Allocate the transaction ID for `operation`.
    ///
    /// Inside a session IDs run 1, 2, 3 and wrap from 0xFFFFFFFE back to 1.
    /// Session-exempt operations outside a session use 0.
    pub fn next_transaction_id(&mut self, operation: OperationCode) -> Result<u32> {
        match self.state {
            SessionState::Open { .. } | SessionState::Closing => Ok(self.advance()),
            SessionState::Closed | SessionState::Opening if operation.is_session_exempt() => {
                Ok(NO_TRANSACTION)
            }
            _ => Err(PtpError::SessionNotOpen { operation }),
        }
    }

    fn advance(&mut self) -> u32 {
        self.transaction_id = if self.transaction_id >= LAST_TRANSACTION_ID {
            FIRST_TRANSACTION_ID
        } else {
            self.transaction_id + 1
        };
        self.transaction_id
    }

    fn reset(&mut self) {
        self.state = SessionState::Closed;
        self.session_id = None;
        self.transaction_id = NO_TRANSACTION;
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionIdPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(mgr: &mut SessionManager) -> u64 {
        match mgr.begin_open().unwrap() {
            OpenStep::Send { session_id } => mgr.finish_open(session_id, true).unwrap(),
            OpenStep::Nested { generation } => generation,
        }
    }

    #[test]
    fn test_open_close_transitions() {
        let mut mgr = SessionManager::default();
        assert_eq!(mgr.state(), SessionState::Closed);

        assert_eq!(mgr.begin_open().unwrap(), OpenStep::Send { session_id: 1 });
        assert_eq!(mgr.state(), SessionState::Opening);
        let generation = mgr.finish_open(1, true).unwrap();
        assert_eq!(mgr.state(), SessionState::Open { depth: 1 });
        assert_eq!(mgr.session_id(), Some(1));

        assert_eq!(
            mgr.begin_close(generation).unwrap(),
            CloseStep::Send { transaction_id: 1 }
        );
        assert_eq!(mgr.state(), SessionState::Closing);
        mgr.finish_close();
        assert_eq!(mgr.state(), SessionState::Closed);
        assert_eq!(mgr.session_id(), None);
    }

    #[test]
    fn test_failed_open_stays_closed() {
        let mut mgr = SessionManager::default();
        mgr.begin_open().unwrap();
        assert_eq!(mgr.finish_open(1, false), None);
        assert_eq!(mgr.state(), SessionState::Closed);
        // The failed ID is offered again.
        assert_eq!(mgr.begin_open().unwrap(), OpenStep::Send { session_id: 1 });
    }

    #[test]
    fn test_nesting_shares_counter() {
        let mut mgr = SessionManager::default();
        let outer = open(&mut mgr);
        let op = OperationCode::GET_STORAGE_IDS;
        assert_eq!(mgr.next_transaction_id(op).unwrap(), 1);

        let inner = open(&mut mgr);
        assert_eq!(inner, outer);
        assert_eq!(mgr.depth(), 2);
        assert_eq!(mgr.next_transaction_id(op).unwrap(), 2);

        assert_eq!(
            mgr.begin_close(inner).unwrap(),
            CloseStep::Nested { depth: 1 }
        );
        assert_eq!(mgr.next_transaction_id(op).unwrap(), 3);
        assert_eq!(
            mgr.begin_close(outer).unwrap(),
            CloseStep::Send { transaction_id: 4 }
        );
    }

    #[test]
    fn test_session_ids_increment_or_stay_fixed() {
        let mut mgr = SessionManager::default();
        let g = open(&mut mgr);
        mgr.begin_close(g).unwrap();
        mgr.finish_close();
        assert_eq!(mgr.begin_open().unwrap(), OpenStep::Send { session_id: 2 });

        let mut fixed = SessionManager::new(SessionIdPolicy::Fixed(7));
        let g = open(&mut fixed);
        assert_eq!(fixed.session_id(), Some(7));
        fixed.begin_close(g).unwrap();
        fixed.finish_close();
        assert_eq!(fixed.begin_open().unwrap(), OpenStep::Send { session_id: 7 });
    }

    #[test]
    fn test_transaction_ids_outside_session() {
        let mut mgr = SessionManager::default();
        assert_eq!(
            mgr.next_transaction_id(OperationCode::GET_DEVICE_INFO)
                .unwrap(),
            0
        );
        assert!(matches!(
            mgr.next_transaction_id(OperationCode::GET_OBJECT),
            Err(PtpError::SessionNotOpen { .. })
        ));
        // Counter untouched by exempt operations.
        open(&mut mgr);
        assert_eq!(
            mgr.next_transaction_id(OperationCode::GET_DEVICE_INFO)
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_transaction_id_wraps_to_one() {
        let mut mgr = SessionManager::default();
        open(&mut mgr);
        mgr.transaction_id = LAST_TRANSACTION_ID - 1;
        let op = OperationCode::GET_NUM_OBJECTS;
        assert_eq!(mgr.next_transaction_id(op).unwrap(), LAST_TRANSACTION_ID);
        assert_eq!(mgr.next_transaction_id(op).unwrap(), 1);
    }

    #[test]
    fn test_device_reset_makes_scopes_stale() {
        let mut mgr = SessionManager::default();
        let old = open(&mut mgr);
        open(&mut mgr);
        mgr.mark_closed_by_device();
        assert_eq!(mgr.state(), SessionState::Closed);
        assert_eq!(mgr.begin_close(old).unwrap(), CloseStep::Stale);

        // A fresh session is not disturbed by the old scopes unwinding.
        let new = open(&mut mgr);
        assert_ne!(new, old);
        assert_eq!(mgr.begin_close(old).unwrap(), CloseStep::Stale);
        assert_eq!(mgr.depth(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionState::Open { depth: 3 }.to_string(), "OPEN(3)");
        assert_eq!(SessionState::Closed.to_string(), "CLOSED");
    }
}
