use std::sync::Arc;

use parking_lot::Mutex;
use recycle_types::BlockHeight;

use crate::call::{CallResult, ContractCall};
use crate::config::HostConfig;
use crate::host::ContractHost;

/// Thread-safe handle to a [`ContractHost`].
///
/// Each call runs inside a single global critical section, so the
/// check-then-act sequence of every operation is never interleaved with
/// another call.
#[derive(Clone)]
pub struct SharedHost {
    inner: Arc<Mutex<ContractHost>>,
}

impl SharedHost {
    pub fn new(config: &HostConfig) -> Self {
        Self::from_host(ContractHost::new(config))
    }

    pub fn from_host(host: ContractHost) -> Self {
        Self {
            inner: Arc::new(Mutex::new(host)),
        }
    }

    pub fn call(&self, call: &ContractCall) -> CallResult {
        self.inner.lock().call(call)
    }

    pub fn advance_block(&self) -> BlockHeight {
        self.inner.lock().advance_block()
    }

    /// Run `f` against a consistent view of the host.
    pub fn read<R>(&self, f: impl FnOnce(&ContractHost) -> R) -> R {
        let host = self.inner.lock();
        f(&*host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clones_share_state() {
        let host = SharedHost::new(&HostConfig::default());
        let other = host.clone();

        host.call(&ContractCall::new("record-waste", vec![json!(3)], "user1"));
        let total = other.read(|h| {
            h.waste_tracker()
                .waste_record(&recycle_types::Principal::new("user1"))
                .total_waste
        });
        assert_eq!(total, 3);
    }
}
