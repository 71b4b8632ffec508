//! Exploration session orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::arrival::{ArrivalCheck, ArrivalResult};
use crate::geo::Coordinate;
use crate::merge::merge_target;
use crate::position::{
    fallback_coordinate, DeviceLocationApi, PlausibilityPolicy, PositionProvider,
};
use crate::search::{LocationPoint, NearbyQuery, NearbySearchClient, SearchError};

use super::config::SessionConfig;
use super::error::SessionError;
use super::state::SessionState;

/// The mission destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl Target {
    fn to_point(&self) -> LocationPoint {
        LocationPoint {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            phone: None,
            category_id: None,
            category_name: None,
            coordinate: self.coordinate,
            distance_km: None,
            is_target: true,
        }
    }
}

/// Exploration point offered when every search attempt fails.
fn fallback_point() -> LocationPoint {
    LocationPoint {
        id: "default".to_string(),
        name: "나의 모교 초등학교 방문하기".to_string(),
        address: "경남 함안군 가야읍 함안대로 585-1".to_string(),
        phone: None,
        category_id: None,
        category_name: None,
        coordinate: fallback_coordinate(),
        distance_km: None,
        is_target: false,
    }
}

#[derive(Default)]
struct SessionInner {
    state: SessionState,
    target: Option<Target>,
    points: Vec<LocationPoint>,
}

/// Releases the busy flag when an operation completes, on every exit
/// path including errors.
struct BusyToken<'a>(&'a AtomicBool);

impl Drop for BusyToken<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// An exploration mission from discovery to arrival.
///
/// Drives the flow Idle → ResolvingCenter → SearchingNearby → Ready →
/// Verifying → Arrived / NotYetArrived. Generic over the platform
/// location seam, the plausibility policy, and the search backend so
/// every stage can be substituted in tests.
///
/// Operations serialize through a busy flag: a `start` or
/// `verify_arrival` issued while another is in flight fails fast with
/// [`SessionError::Busy`] instead of queueing.
pub struct ExplorationSession<D, P, C> {
    provider: PositionProvider<D, P>,
    client: C,
    config: SessionConfig,
    inner: RwLock<SessionInner>,
    busy: AtomicBool,
}

impl<D, P, C> ExplorationSession<D, P, C>
where
    D: DeviceLocationApi,
    P: PlausibilityPolicy,
    C: NearbySearchClient,
{
    /// Create a session over a position provider and search client.
    pub fn new(provider: PositionProvider<D, P>, client: C, config: SessionConfig) -> Self {
        Self {
            provider,
            client,
            config,
            inner: RwLock::new(SessionInner::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.inner.read().map(|inner| inner.state).unwrap_or_default()
    }

    /// The merged point list, target first. Empty before `start`.
    pub fn points(&self) -> Vec<LocationPoint> {
        self.inner
            .read()
            .map(|inner| inner.points.clone())
            .unwrap_or_default()
    }

    /// The active mission target, if a session has been started.
    pub fn target(&self) -> Option<Target> {
        self.inner
            .read()
            .map(|inner| inner.target.clone())
            .unwrap_or(None)
    }

    fn try_acquire(&self) -> Result<BusyToken<'_>, SessionError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(SessionError::Busy);
        }
        Ok(BusyToken(&self.busy))
    }

    fn set_state(&self, state: SessionState) {
        if let Ok(mut inner) = self.inner.write() {
            inner.state = state;
        }
    }

    /// Start a mission toward `target`.
    ///
    /// Resolves the search center from the current position, discovers
    /// nearby points, and merges the target in front. Network search
    /// failures are retried per the config; if every attempt fails the
    /// session still becomes `Ready { degraded: true }` with a single
    /// hardcoded exploration point, so a flaky backend never blocks the
    /// mission.
    ///
    /// # Errors
    ///
    /// * [`SessionError::Busy`] when another operation is in flight.
    /// * [`SessionError::Position`] when the center cannot be resolved;
    ///   the session returns to Idle.
    /// * [`SessionError::Search`] when the configured query is invalid;
    ///   the session returns to Idle.
    pub async fn start(&self, target: Target) -> Result<SessionState, SessionError> {
        let _busy = self.try_acquire()?;

        tracing::info!(target_id = %target.id, target_name = %target.name, "exploration session starting");
        self.set_state(SessionState::ResolvingCenter);

        let fix = match self.provider.current_position().await {
            Ok(fix) => fix,
            Err(e) => {
                tracing::warn!(error = %e, "failed to resolve search center");
                self.set_state(SessionState::Idle);
                return Err(SessionError::Position(e));
            }
        };

        self.set_state(SessionState::SearchingNearby);

        let query = NearbyQuery {
            center: fix.coordinate,
            radius_km: self.config.radius_km,
            limit: self.config.limit,
        };

        let (points, degraded) = match self.search_with_retry(&query).await {
            Ok(nearby) => (merge_target(target.to_point(), nearby), false),
            Err(SearchError::InvalidQuery(msg)) => {
                // A rejected query means the session config is wrong
                self.set_state(SessionState::Idle);
                return Err(SessionError::Search(SearchError::InvalidQuery(msg)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "nearby search failed, entering degraded session");
                (merge_target(target.to_point(), vec![fallback_point()]), true)
            }
        };

        let state = SessionState::Ready { degraded };
        if let Ok(mut inner) = self.inner.write() {
            inner.state = state;
            inner.target = Some(target);
            inner.points = points;
        }

        tracing::info!(
            state = %state,
            source = %fix.source,
            points = self.points().len(),
            "exploration session ready"
        );

        Ok(state)
    }

    /// Verify whether the user has arrived at the mission target.
    ///
    /// Acquires a fresh position on every call, so the user can retry
    /// as often as they like while walking toward the target. Allowed
    /// from `Ready`, `Arrived`, and `NotYetArrived`; the outcome
    /// transitions the session to `Arrived` or `NotYetArrived`.
    ///
    /// # Errors
    ///
    /// * [`SessionError::Busy`] when another operation is in flight.
    /// * [`SessionError::NotReady`] when no mission is ready.
    /// * [`SessionError::Position`] when no fresh fix could be
    ///   acquired; the previous state is restored.
    pub async fn verify_arrival(&self) -> Result<ArrivalResult, SessionError> {
        let _busy = self.try_acquire()?;

        let (previous, target) = self
            .inner
            .read()
            .map(|inner| (inner.state, inner.target.clone()))
            .unwrap_or_default();

        if !previous.can_verify() {
            return Err(SessionError::NotReady(previous));
        }
        let target = target.ok_or(SessionError::NotReady(previous))?;

        self.set_state(SessionState::Verifying);

        let fix = match self.provider.current_position().await {
            Ok(fix) => fix,
            Err(e) => {
                tracing::warn!(error = %e, "arrival verification could not get a fresh position");
                self.set_state(previous);
                return Err(SessionError::Position(e));
            }
        };

        let check = ArrivalCheck::with_radius(target.coordinate, self.config.completion_radius_m);
        let result = check.verify(&fix.coordinate);

        self.set_state(if result.arrived {
            SessionState::Arrived
        } else {
            SessionState::NotYetArrived
        });

        tracing::info!(
            arrived = result.arrived,
            distance_m = result.distance_m,
            remaining_m = result.remaining_m,
            source = %fix.source,
            "arrival verification completed"
        );

        Ok(result)
    }

    async fn search_with_retry(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<LocationPoint>, SearchError> {
        let mut attempt = 0;
        loop {
            match self.client.search_nearby(query).await {
                Ok(points) => return Ok(points),
                Err(err) => {
                    let retryable = matches!(err, SearchError::Network(_));
                    if !retryable || attempt >= self.config.search_retries {
                        return Err(err);
                    }
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_attempts = self.config.search_retries + 1,
                        error = %err,
                        "nearby search failed, retrying"
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicU32;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::position::{DeviceFix, FixRequest, PositionError};

    use super::*;

    struct ScriptedDevice {
        permission: bool,
        fixes: Mutex<VecDeque<Result<DeviceFix, PositionError>>>,
        calls: AtomicU32,
    }

    impl ScriptedDevice {
        fn with_fixes(fixes: Vec<Result<DeviceFix, PositionError>>) -> Self {
            Self {
                permission: true,
                fixes: Mutex::new(fixes.into()),
                calls: AtomicU32::new(0),
            }
        }

        fn repeating(fix: DeviceFix) -> Self {
            // A single scripted fix replayed forever
            Self {
                permission: true,
                fixes: Mutex::new(VecDeque::from(vec![Ok(fix); 16])),
                calls: AtomicU32::new(0),
            }
        }

        fn denying() -> Self {
            Self {
                permission: false,
                fixes: Mutex::new(VecDeque::new()),
                calls: AtomicU32::new(0),
            }
        }
    }

    impl DeviceLocationApi for ScriptedDevice {
        async fn request_permission(&self) -> bool {
            self.permission
        }

        async fn acquire_fix(&self, _request: &FixRequest) -> Result<DeviceFix, PositionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.fixes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(PositionError::Unavailable("script exhausted".into())))
        }
    }

    struct ScriptedClient {
        responses: Mutex<VecDeque<Result<Vec<LocationPoint>, SearchError>>>,
        calls: AtomicU32,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<Vec<LocationPoint>, SearchError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicU32::new(0),
            }
        }
    }

    impl NearbySearchClient for ScriptedClient {
        async fn search_nearby(
            &self,
            _query: &NearbyQuery,
        ) -> Result<Vec<LocationPoint>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    const SCHOOL_LAT: f64 = 35.2722;
    const SCHOOL_LON: f64 = 128.4061;

    fn device_fix_at(lat: f64, lon: f64) -> DeviceFix {
        DeviceFix {
            latitude: lat,
            longitude: lon,
            accuracy_m: 10.0,
        }
    }

    fn school_target() -> Target {
        Target {
            id: "target".to_string(),
            name: "함안초등학교".to_string(),
            address: "경남 함안군 가야읍 함안대로 585-1".to_string(),
            coordinate: Coordinate::new(SCHOOL_LAT, SCHOOL_LON).unwrap(),
        }
    }

    fn museum_point() -> LocationPoint {
        LocationPoint {
            id: "42".to_string(),
            name: "함안박물관".to_string(),
            address: "경남 함안군 가야읍 고분길 153".to_string(),
            phone: None,
            category_id: None,
            category_name: None,
            coordinate: Coordinate::new(35.2598, 128.4127).unwrap(),
            distance_km: Some(1.4),
            is_target: false,
        }
    }

    fn fast_config() -> SessionConfig {
        SessionConfig {
            retry_delay: Duration::from_millis(1),
            ..SessionConfig::default()
        }
    }

    fn session_with(
        device: ScriptedDevice,
        client: ScriptedClient,
        config: SessionConfig,
    ) -> ExplorationSession<
        ScriptedDevice,
        crate::position::WesternHemisphereImplausible,
        ScriptedClient,
    > {
        ExplorationSession::new(PositionProvider::new(device), client, config)
    }

    #[tokio::test]
    async fn test_start_reaches_ready_with_merged_points() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![Ok(vec![museum_point()])]);
        let session = session_with(device, client, fast_config());

        let state = session.start(school_target()).await.unwrap();

        assert_eq!(state, SessionState::Ready { degraded: false });
        let points = session.points();
        assert_eq!(points.len(), 2);
        assert!(points[0].is_target);
        assert_eq!(points[0].id, "target");
        assert_eq!(points[1].id, "42");
    }

    #[tokio::test]
    async fn test_search_failure_degrades_instead_of_erroring() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![
            Err(SearchError::Network("connection refused".into())),
            Err(SearchError::Network("connection refused".into())),
        ]);
        let session = session_with(device, client, fast_config());

        let state = session.start(school_target()).await.unwrap();

        assert_eq!(state, SessionState::Ready { degraded: true });
        let points = session.points();
        assert_eq!(points.len(), 2);
        assert!(points[0].is_target);
        assert_eq!(points[1].id, "default");
    }

    #[tokio::test]
    async fn test_network_failure_retried_then_succeeds() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![
            Err(SearchError::Network("timeout".into())),
            Ok(vec![museum_point()]),
        ]);
        let session = session_with(device, client, fast_config());

        let state = session.start(school_target()).await.unwrap();

        assert_eq!(state, SessionState::Ready { degraded: false });
        assert_eq!(session.client.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_decode_failure_not_retried() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![
            Err(SearchError::Decode("unexpected body".into())),
            Ok(vec![museum_point()]),
        ]);
        let session = session_with(device, client, fast_config());

        let state = session.start(school_target()).await.unwrap();

        // One attempt only, then straight to the degraded list
        assert_eq!(session.client.calls.load(Ordering::SeqCst), 1);
        assert_eq!(state, SessionState::Ready { degraded: true });
    }

    #[tokio::test]
    async fn test_invalid_query_aborts_to_idle() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![Err(SearchError::InvalidQuery(
            "radius_km must be positive, got 0".into(),
        ))]);
        let session = session_with(device, client, fast_config());

        let result = session.start(school_target()).await;

        assert!(matches!(
            result,
            Err(SessionError::Search(SearchError::InvalidQuery(_)))
        ));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test]
    async fn test_permission_denied_returns_to_idle() {
        let device = ScriptedDevice::denying();
        let client = ScriptedClient::new(vec![Ok(vec![museum_point()])]);
        let session = session_with(device, client, fast_config());

        let result = session.start(school_target()).await;

        assert_eq!(
            result.unwrap_err(),
            SessionError::Position(PositionError::PermissionDenied)
        );
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.points().is_empty());
    }

    #[tokio::test]
    async fn test_verify_before_start_is_not_ready() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![]);
        let session = session_with(device, client, fast_config());

        let result = session.verify_arrival().await;
        assert_eq!(
            result.unwrap_err(),
            SessionError::NotReady(SessionState::Idle)
        );
    }

    #[tokio::test]
    async fn test_verify_at_target_arrives() {
        let device = ScriptedDevice::repeating(device_fix_at(SCHOOL_LAT, SCHOOL_LON));
        let client = ScriptedClient::new(vec![Ok(vec![])]);
        let session = session_with(device, client, fast_config());

        session.start(school_target()).await.unwrap();
        let result = session.verify_arrival().await.unwrap();

        assert!(result.arrived);
        assert!(result.remaining_m.abs() < 1e-6);
        assert_eq!(session.state(), SessionState::Arrived);
    }

    #[tokio::test]
    async fn test_verify_far_away_is_not_yet_arrived() {
        // Start at the school, then verify from ~1 km north
        let device = ScriptedDevice::with_fixes(vec![
            Ok(device_fix_at(SCHOOL_LAT, SCHOOL_LON)),
            Ok(device_fix_at(SCHOOL_LAT + 0.01, SCHOOL_LON)),
        ]);
        let client = ScriptedClient::new(vec![Ok(vec![])]);
        let session = session_with(device, client, fast_config());

        session.start(school_target()).await.unwrap();
        let result = session.verify_arrival().await.unwrap();

        assert!(!result.arrived);
        assert!(result.distance_m > 1000.0);
        assert!(result.remaining_m > 0.0);
        assert_eq!(session.state(), SessionState::NotYetArrived);
    }

    #[tokio::test]
    async fn test_reverification_acquires_fresh_fix_each_time() {
        // Fix 1 seeds the search, fix 2 misses, fix 3 arrives
        let device = std::sync::Arc::new(ScriptedDevice::with_fixes(vec![
            Ok(device_fix_at(SCHOOL_LAT, SCHOOL_LON)),
            Ok(device_fix_at(SCHOOL_LAT + 0.01, SCHOOL_LON)),
            Ok(device_fix_at(SCHOOL_LAT, SCHOOL_LON)),
        ]));
        let client = ScriptedClient::new(vec![Ok(vec![])]);
        let session = ExplorationSession::new(
            PositionProvider::new(device.clone()),
            client,
            fast_config(),
        );

        session.start(school_target()).await.unwrap();

        let first = session.verify_arrival().await.unwrap();
        assert!(!first.arrived);
        assert_eq!(session.state(), SessionState::NotYetArrived);

        let second = session.verify_arrival().await.unwrap();
        assert!(second.arrived);
        assert_eq!(session.state(), SessionState::Arrived);

        assert_eq!(device.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_verify_position_failure_restores_previous_state() {
        let device = ScriptedDevice::with_fixes(vec![Ok(device_fix_at(SCHOOL_LAT, SCHOOL_LON))]);
        let client = ScriptedClient::new(vec![Ok(vec![])]);
        let session = session_with(device, client, fast_config());

        session.start(school_target()).await.unwrap();
        // Script exhausted: the next acquisition fails
        let result = session.verify_arrival().await;

        assert!(matches!(result, Err(SessionError::Position(_))));
        assert_eq!(session.state(), SessionState::Ready { degraded: false });
    }

    #[tokio::test]
    async fn test_busy_guard_released_after_failure() {
        let device = ScriptedDevice::denying();
        let client = ScriptedClient::new(vec![]);
        let session = session_with(device, client, fast_config());

        assert!(session.start(school_target()).await.is_err());
        // The flag must not stay stuck after the error path
        assert!(!session.busy.load(Ordering::SeqCst));
    }
}
