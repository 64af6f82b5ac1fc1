//! Time-boxed cache for the dashboard aggregate snapshot.
//!
//! The dashboard endpoint is the most expensive call the console makes, so
//! its snapshot is held warm for a TTL. The cache is a tri-state machine:
//!
//! - `Cold`: nothing cached; the next `get` fetches.
//! - `Fetching`: one leader call is on the network; concurrent callers join
//!   its broadcast instead of issuing duplicate requests.
//! - `Warm`: a snapshot is held and served until the TTL elapses.
//!
//! Each fetch attempt is bounded by a timeout and retried on transient
//! failures with doubling backoff. Time comes from `tokio::time`, so tests
//! drive the TTL and the timeouts with a paused clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use cobro_client::DashboardRepository;
use cobro_core::ApiError;
use cobro_models::DashboardResumen;
use tokio::sync::broadcast;
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, info, instrument, warn};

use crate::config::CacheConfig;

/// Failure delivered to every caller attached to the same fetch flight.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// Every attempt of the flight failed; carries the final error.
    #[error("dashboard fetch failed after {attempts} attempt(s): {source}")]
    FetchFailed {
        attempts: u32,
        #[source]
        source: Arc<ApiError>,
    },

    /// The flight's leader was dropped before it could finish.
    #[error("dashboard fetch was abandoned mid-flight")]
    Abandoned,
}

type FlightResult = Result<DashboardResumen, CacheError>;

enum CacheState {
    /// No snapshot held, or the last one was invalidated.
    Cold,
    /// A leader is on the network; joiners subscribe to the broadcast.
    Fetching {
        generation: u64,
        tx: broadcast::Sender<FlightResult>,
    },
    /// A snapshot is held; fresh until `obtenido_en + ttl`.
    Warm {
        resumen: DashboardResumen,
        obtenido_en: Instant,
    },
}

/// What `get` decided to do while it held the state lock.
enum Action {
    Hit(DashboardResumen),
    Join(broadcast::Receiver<FlightResult>),
    Lead(u64, broadcast::Sender<FlightResult>),
}

/// Single-flight, TTL-bound cache in front of a [`DashboardRepository`].
///
/// Built once per process and shared by reference; the constructor takes
/// its source explicitly so tests can inject counting fakes.
pub struct DashboardCache {
    source: Arc<dyn DashboardRepository>,
    config: CacheConfig,
    state: Mutex<CacheState>,
    flights: AtomicU64,
}

impl std::fmt::Debug for DashboardCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardCache")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DashboardCache {
    pub fn new(source: Arc<dyn DashboardRepository>, config: CacheConfig) -> Self {
        Self {
            source,
            config,
            state: Mutex::new(CacheState::Cold),
            flights: AtomicU64::new(0),
        }
    }

    /// Returns the dashboard snapshot, fetching only when necessary.
    ///
    /// A warm, unexpired snapshot is returned without touching the network.
    /// When the cache is cold this call becomes the flight's leader and
    /// performs the fetch; callers arriving while a flight is up receive
    /// the same result the leader does.
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    pub async fn get(&self) -> FlightResult {
        let action = {
            let mut state = self.state.lock().unwrap();
            match &*state {
                CacheState::Warm {
                    resumen,
                    obtenido_en,
                } if obtenido_en.elapsed() < self.config.ttl => Action::Hit(resumen.clone()),
                // Subscribing under the lock guarantees the receiver exists
                // before the leader can send.
                CacheState::Fetching { tx, .. } => Action::Join(tx.subscribe()),
                // A stale Warm is treated exactly like Cold.
                CacheState::Cold | CacheState::Warm { .. } => {
                    let generation = self.flights.fetch_add(1, Ordering::Relaxed);
                    let (tx, _rx) = broadcast::channel(1);
                    *state = CacheState::Fetching {
                        generation,
                        tx: tx.clone(),
                    };
                    Action::Lead(generation, tx)
                }
            }
        };

        match action {
            Action::Hit(resumen) => {
                debug!("dashboard cache warm, serving held snapshot");
                Ok(resumen)
            }
            Action::Join(mut rx) => {
                debug!("dashboard fetch already in flight, joining");
                match rx.recv().await {
                    Ok(result) => result,
                    Err(_) => Err(CacheError::Abandoned),
                }
            }
            Action::Lead(generation, tx) => {
                debug!(cache.flight = generation, "dashboard cache cold, fetching");
                self.lead_flight(generation, tx).await
            }
        }
    }

    /// Discards whatever is cached, forcing the next `get` to fetch.
    ///
    /// An in-flight fetch is orphaned rather than aborted: its joiners
    /// still receive its result, but the result is not installed.
    #[instrument(skip(self), fields(cache.operation = "INVALIDATE"))]
    pub fn invalidate(&self) {
        let mut state = self.state.lock().unwrap();
        if !matches!(&*state, CacheState::Cold) {
            debug!("dashboard cache invalidated");
            *state = CacheState::Cold;
        }
    }

    /// Invalidate, then fetch. Guarantees fresh data even right after a
    /// warm read.
    #[instrument(skip(self), fields(cache.operation = "REFRESH"))]
    pub async fn refresh(&self) -> FlightResult {
        self.invalidate();
        self.get().await
    }

    async fn lead_flight(&self, generation: u64, tx: broadcast::Sender<FlightResult>) -> FlightResult {
        let mut guard = FlightGuard {
            cache: self,
            generation,
            completed: false,
        };

        let outcome = self.fetch_with_retries().await;
        guard.completed = true;

        {
            let mut state = self.state.lock().unwrap();
            // Only install the outcome if this flight still owns the state;
            // an invalidate() during the fetch supersedes it.
            let owns_state = matches!(
                &*state,
                CacheState::Fetching { generation: g, .. } if *g == generation
            );
            if owns_state {
                *state = match &outcome {
                    Ok(resumen) => CacheState::Warm {
                        resumen: resumen.clone(),
                        obtenido_en: Instant::now(),
                    },
                    Err(_) => CacheState::Cold,
                };
            }
        }

        match &outcome {
            Ok(_) => info!(cache.flight = generation, "dashboard snapshot cached"),
            Err(err) => warn!(cache.flight = generation, error = %err, "dashboard fetch flight failed"),
        }

        // A send error only means nobody joined the flight.
        let _ = tx.send(outcome.clone());

        outcome
    }

    async fn fetch_with_retries(&self) -> FlightResult {
        let max_attempts = self.config.retries + 1;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let result = match timeout(self.config.fetch_timeout, self.source.resumen()).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout(self.config.fetch_timeout)),
            };

            match result {
                Ok(resumen) => {
                    if attempt > 1 {
                        info!(attempt, "dashboard fetch succeeded after retry");
                    }
                    return Ok(resumen);
                }
                Err(err) if err.is_retryable() && attempt < max_attempts => {
                    let backoff = self.config.backoff_for(attempt - 1);
                    warn!(
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %err,
                        "dashboard fetch failed, retrying after backoff"
                    );
                    sleep(backoff).await;
                }
                Err(err) => {
                    return Err(CacheError::FetchFailed {
                        attempts: attempt,
                        source: Arc::new(err),
                    });
                }
            }
        }
    }
}

/// Puts an abandoned flight back to `Cold` so the cache cannot wedge in
/// `Fetching`.
///
/// The leader future can be dropped at any await point. When that happens
/// this guard resets the state, and dropping the flight's senders closes
/// the broadcast channel, which wakes every joiner.
struct FlightGuard<'a> {
    cache: &'a DashboardCache,
    generation: u64,
    completed: bool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let mut state = self.cache.state.lock().unwrap();
        if matches!(
            &*state,
            CacheState::Fetching { generation, .. } if *generation == self.generation
        ) {
            *state = CacheState::Cold;
        }
    }
}
