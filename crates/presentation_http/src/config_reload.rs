//! Hot-reloadable reference data
//!
//! SIGHUP re-reads the configuration and every dataset. The new bundle is
//! built off to the side and swapped in atomically; a failed reload keeps
//! serving the previous one.

use std::sync::Arc;

use application::{ReferenceData, ports::ReferenceDataSource};
use arc_swap::ArcSwap;
use infrastructure::{AppConfig, load_reference_data};
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Error returned by a reference data loader
pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// Builds a fresh reference data bundle
pub type ReferenceDataLoader = Arc<dyn Fn() -> Result<ReferenceData, LoadError> + Send + Sync>;

/// Reference data that supports atomic reload via SIGHUP
#[derive(Clone)]
pub struct ReloadableReferenceData {
    inner: Arc<ArcSwap<ReferenceData>>,
    loader: ReferenceDataLoader,
    /// Notifier for reload events
    notify: watch::Sender<u64>,
    /// Receiver for reload events
    receiver: watch::Receiver<u64>,
}

impl std::fmt::Debug for ReloadableReferenceData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadableReferenceData")
            .field("summary", &self.inner.load().summary())
            .field("version", &*self.receiver.borrow())
            .finish_non_exhaustive()
    }
}

impl ReloadableReferenceData {
    /// Wrap an initial bundle and the loader used for reloads
    #[must_use]
    pub fn new<F>(initial: ReferenceData, loader: F) -> Self
    where
        F: Fn() -> Result<ReferenceData, LoadError> + Send + Sync + 'static,
    {
        let (notify, receiver) = watch::channel(0);
        Self {
            inner: Arc::new(ArcSwap::from_pointee(initial)),
            loader: Arc::new(loader),
            notify,
            receiver,
        }
    }

    /// Reload from `AppConfig::load()` and the files it names
    #[must_use]
    pub fn from_config(initial: ReferenceData) -> Self {
        Self::new(initial, || {
            let config = AppConfig::load()?;
            Ok(load_reference_data(&config)?)
        })
    }

    /// Get the current bundle
    #[must_use]
    pub fn load(&self) -> Arc<ReferenceData> {
        self.inner.load_full()
    }

    /// Rebuild the bundle and swap it in
    ///
    /// Returns `true` if the reload was successful
    pub fn reload(&self) -> bool {
        match (self.loader)() {
            Ok(data) => {
                let new_summary = data.summary();
                let old = self.inner.swap(Arc::new(data));
                let old_summary = old.summary();
                info!(
                    old_stations = old_summary.stations,
                    old_zones = old_summary.zones,
                    old_traffic_rows = old_summary.traffic_rows,
                    stations = new_summary.stations,
                    zones = new_summary.zones,
                    traffic_rows = new_summary.traffic_rows,
                    "Reference data reloaded"
                );
                let version = *self.notify.borrow() + 1;
                if self.notify.send(version).is_err() {
                    warn!("No reload receivers active");
                }
                true
            },
            Err(e) => {
                error!(error = %e, "Failed to reload reference data");
                false
            },
        }
    }

    /// Subscribe to reload notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }
}

impl ReferenceDataSource for ReloadableReferenceData {
    fn current(&self) -> Arc<ReferenceData> {
        self.load()
    }
}

/// Spawn a background task that listens for SIGHUP and reloads the data
#[cfg(unix)]
pub fn spawn_reload_handler(data: ReloadableReferenceData) -> ReloadableReferenceData {
    use tokio::signal::unix::{SignalKind, signal};

    let data_clone = data.clone();
    tokio::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to install SIGHUP handler: {}", e);
                return;
            },
        };

        loop {
            sighup.recv().await;
            info!("Received SIGHUP, reloading reference data");
            if !data_clone.reload() {
                warn!("Reload failed, keeping previous reference data");
            }
        }
    });

    data
}

/// No-op on non-Unix systems
#[cfg(not(unix))]
pub fn spawn_reload_handler(data: ReloadableReferenceData) -> ReloadableReferenceData {
    warn!("SIGHUP reload not supported on this platform");
    data
}
