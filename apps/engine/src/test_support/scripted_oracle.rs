//! Scripted PathOracle: resolution, expiry and entropy driven by the test.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::direction::{correct_direction, Direction};
use crate::oracle::{CommitContext, OracleError, OracleHandle, PathOracle};

#[derive(Debug, Clone)]
enum Slot {
    Pending,
    Resolved([u8; 32]),
    Expired,
}

#[derive(Default)]
struct Inner {
    slots: HashMap<OracleHandle, Slot>,
    order: Vec<OracleHandle>,
}

/// Deterministic oracle whose commitments resolve only when the test says
/// so. Commit contexts are accepted and discarded; binding validation is the
/// real oracle's concern.
#[derive(Default)]
pub struct ScriptedOracle {
    inner: Mutex<Inner>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the most recent commitment.
    pub fn latest(&self) -> Option<OracleHandle> {
        self.inner.lock().order.last().copied()
    }

    /// Finalize a commitment with explicit entropy.
    pub fn resolve(&self, handle: OracleHandle, entropy: [u8; 32]) {
        self.inner.lock().slots.insert(handle, Slot::Resolved(entropy));
    }

    /// Finalize the most recent commitment so it reveals `direction`.
    pub fn resolve_latest(&self, direction: Direction) -> OracleHandle {
        let handle = self.latest().expect("no commitment to resolve");
        self.resolve(handle, entropy_for(direction));
        handle
    }

    /// Expire a commitment: reveal fails from now on.
    pub fn expire(&self, handle: OracleHandle) {
        self.inner.lock().slots.insert(handle, Slot::Expired);
    }

    /// Expire the most recent commitment.
    pub fn expire_latest(&self) {
        let handle = self.latest().expect("no commitment to expire");
        self.expire(handle);
    }
}

#[async_trait]
impl PathOracle for ScriptedOracle {
    async fn commit(&self, _ctx: CommitContext) -> Result<OracleHandle, OracleError> {
        let handle = OracleHandle::new();
        let mut inner = self.inner.lock();
        inner.slots.insert(handle, Slot::Pending);
        inner.order.push(handle);
        Ok(handle)
    }

    async fn is_resolved(&self, handle: &OracleHandle) -> Result<bool, OracleError> {
        match self.inner.lock().slots.get(handle) {
            None => Err(OracleError::UnknownHandle),
            Some(Slot::Pending) => Ok(false),
            // An expired commitment did finalize; the failure surfaces at
            // reveal time.
            Some(Slot::Resolved(_)) | Some(Slot::Expired) => Ok(true),
        }
    }

    async fn reveal(&self, handle: &OracleHandle) -> Result<[u8; 32], OracleError> {
        match self.inner.lock().slots.get(handle) {
            None => Err(OracleError::UnknownHandle),
            Some(Slot::Pending) => Err(OracleError::NotResolved),
            Some(Slot::Expired) => Err(OracleError::Expired),
            Some(Slot::Resolved(entropy)) => Ok(*entropy),
        }
    }
}

/// Entropy whose derived correct direction is `direction`.
pub fn entropy_for(direction: Direction) -> [u8; 32] {
    entropy_with_salt(direction, 0)
}

/// Entropy for `direction`, salted so repeated resolutions draw different
/// card awards.
pub fn entropy_with_salt(direction: Direction, salt: u8) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[1] = salt;
    bytes[2] = salt; // XOR-cancels, keeps the parity stable
    if correct_direction(&bytes) != direction {
        bytes[0] ^= 1;
    }
    bytes
}
