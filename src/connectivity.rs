use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capability reporting whether the client currently believes it is online.
pub trait ConnectivityProbe: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Shared runtime online/offline flag. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct ConnectivityFlag {
    online: Arc<AtomicBool>,
}

impl ConnectivityFlag {
    pub fn new(online: bool) -> Self { Self { online: Arc::new(AtomicBool::new(online)) } }

    pub fn set_online(&self, online: bool) {
        let previous = self.online.swap(online, Ordering::Relaxed);
        if previous != online {
            crate::log!("Connectivity changed: {}", if online { "online" } else { "offline" });
        }
    }
}

impl Default for ConnectivityFlag {
    fn default() -> Self { Self::new(true) }
}

impl ConnectivityProbe for ConnectivityFlag {
    fn is_online(&self) -> bool { self.online.load(Ordering::Relaxed) }
}
