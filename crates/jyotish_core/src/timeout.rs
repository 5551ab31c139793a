//! Deadline decorator for any [`Ephemeris`].

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::body::Body;
use crate::ephemeris::{BodyState, CalcFlags, Ephemeris, check_jd};
use crate::error::EphemerisError;
use crate::houses::{HouseCusps, HouseSystem};

/// Owns the runtime whose blocking pool runs adapter calls.
///
/// Dropped without waiting, so a call stuck past its deadline cannot hold up
/// the owner.
#[derive(Debug)]
struct CallPool {
    runtime: Option<Runtime>,
}

impl CallPool {
    fn new(workers: usize) -> Result<Self, EphemerisError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .max_blocking_threads(workers.max(1))
            .thread_name("ephemeris-call")
            .enable_time()
            .build()
            .map_err(|e| EphemerisError::Internal(format!("cannot start call pool: {e}")))?;
        Ok(Self {
            runtime: Some(runtime),
        })
    }
}

impl Drop for CallPool {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Bounds every adapter call by `timeout`.
///
/// Calls run on a fixed pool of at most `workers` threads. When the deadline
/// passes the caller gets [`EphemerisError::Timeout`]; the call keeps its
/// pool thread until it returns and its result is discarded. Clones share
/// the pool.
///
/// Call from synchronous code only: the decorator blocks the calling thread
/// and refuses to run inside an async runtime.
#[derive(Debug)]
pub struct TimedEphemeris<E> {
    inner: Arc<E>,
    timeout: Duration,
    pool: Arc<CallPool>,
}

impl<E> Clone for TimedEphemeris<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            timeout: self.timeout,
            pool: Arc::clone(&self.pool),
        }
    }
}

impl<E: Ephemeris + 'static> TimedEphemeris<E> {
    /// Pool sized to the machine's parallelism.
    pub fn new(inner: E, timeout: Duration) -> Result<Self, EphemerisError> {
        let workers = thread::available_parallelism().map_or(4, |n| n.get());
        Self::with_workers(Arc::new(inner), timeout, workers)
    }

    pub fn with_workers(inner: Arc<E>, timeout: Duration, workers: usize) -> Result<Self, EphemerisError> {
        Ok(Self {
            inner,
            timeout,
            pool: Arc::new(CallPool::new(workers)?),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    fn run<T, F>(&self, job: F) -> Result<T, EphemerisError>
    where
        T: Send + 'static,
        F: FnOnce(&E) -> Result<T, EphemerisError> + Send + 'static,
    {
        if Handle::try_current().is_ok() {
            return Err(EphemerisError::Internal(
                "timed ephemeris called from inside an async runtime".into(),
            ));
        }
        let Some(runtime) = self.pool.runtime.as_ref() else {
            return Err(EphemerisError::Internal("call pool is shut down".into()));
        };
        let inner = Arc::clone(&self.inner);
        let deadline = self.timeout;
        let outcome = runtime.block_on(async move {
            let call = tokio::task::spawn_blocking(move || job(&inner));
            tokio::time::timeout(deadline, call).await
        });

        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(join)) => Err(EphemerisError::Internal(format!(
                "ephemeris call did not complete: {join}"
            ))),
            Err(_elapsed) => {
                let millis = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(millis, "ephemeris call timed out");
                Err(EphemerisError::Timeout { millis })
            }
        }
    }
}

impl<E: Ephemeris + 'static> Ephemeris for TimedEphemeris<E> {
    fn calc(&self, jd: f64, body: Body, flags: CalcFlags) -> Result<BodyState, EphemerisError> {
        check_jd(jd)?;
        self.run(move |e| e.calc(jd, body, flags))
    }

    fn houses(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
        system: HouseSystem,
        flags: CalcFlags,
    ) -> Result<HouseCusps, EphemerisError> {
        check_jd(jd)?;
        self.run(move |e| e.houses(jd, latitude_deg, longitude_deg, system, flags))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use parking_lot::Mutex;

    use super::*;

    struct Slow(Duration);

    impl Ephemeris for Slow {
        fn calc(&self, _jd: f64, _body: Body, _flags: CalcFlags) -> Result<BodyState, EphemerisError> {
            thread::sleep(self.0);
            Ok(BodyState {
                longitude_deg: 42.0,
                speed_deg_per_day: 1.0,
            })
        }

        fn houses(
            &self,
            _jd: f64,
            _lat: f64,
            _lon: f64,
            _system: HouseSystem,
            _flags: CalcFlags,
        ) -> Result<HouseCusps, EphemerisError> {
            Err(EphemerisError::OutOfRange { jd: 0.0 })
        }
    }

    /// Records the name and id of every thread that served a call.
    #[derive(Default)]
    struct ThreadRecorder(Mutex<HashSet<(Option<String>, thread::ThreadId)>>);

    impl Ephemeris for ThreadRecorder {
        fn calc(&self, _jd: f64, _body: Body, _flags: CalcFlags) -> Result<BodyState, EphemerisError> {
            let current = thread::current();
            self.0
                .lock()
                .insert((current.name().map(str::to_owned), current.id()));
            Ok(BodyState {
                longitude_deg: 1.0,
                speed_deg_per_day: 1.0,
            })
        }

        fn houses(
            &self,
            _jd: f64,
            _lat: f64,
            _lon: f64,
            _system: HouseSystem,
            _flags: CalcFlags,
        ) -> Result<HouseCusps, EphemerisError> {
            Err(EphemerisError::OutOfRange { jd: 0.0 })
        }
    }

    #[test]
    fn fast_call_passes_through() {
        let timed = TimedEphemeris::new(Slow(Duration::ZERO), Duration::from_secs(5)).unwrap();
        let state = timed.calc(1.0, Body::Sun, CalcFlags::default()).unwrap();
        assert_eq!(state.longitude_deg, 42.0);
    }

    #[test]
    fn slow_call_times_out() {
        let timed =
            TimedEphemeris::new(Slow(Duration::from_millis(500)), Duration::from_millis(20)).unwrap();
        let err = timed.calc(1.0, Body::Sun, CalcFlags::default()).unwrap_err();
        assert_eq!(err, EphemerisError::Timeout { millis: 20 });
    }

    #[test]
    fn inner_errors_propagate() {
        let timed = TimedEphemeris::new(Slow(Duration::ZERO), Duration::from_secs(5)).unwrap();
        let err = timed
            .houses(1.0, 0.0, 0.0, HouseSystem::Equal, CalcFlags::default())
            .unwrap_err();
        assert!(matches!(err, EphemerisError::OutOfRange { .. }));
    }

    #[test]
    fn non_finite_jd_rejected_before_dispatch() {
        let timed =
            TimedEphemeris::new(Slow(Duration::from_secs(60)), Duration::from_millis(1)).unwrap();
        let err = timed.calc(f64::NAN, Body::Sun, CalcFlags::default()).unwrap_err();
        assert!(matches!(err, EphemerisError::InvalidQuery(_)));
    }

    #[test]
    fn many_calls_reuse_a_bounded_pool() {
        let recorder = Arc::new(ThreadRecorder::default());
        let timed =
            TimedEphemeris::with_workers(Arc::clone(&recorder), Duration::from_secs(5), 2).unwrap();
        for i in 0..500 {
            timed.calc(f64::from(i), Body::Moon, CalcFlags::default()).unwrap();
        }
        let seen = recorder.0.lock();
        assert!(!seen.is_empty());
        assert!(seen.len() <= 2, "{} distinct threads served calls", seen.len());
        assert!(
            seen.iter()
                .all(|(name, _)| name.as_deref() == Some("ephemeris-call"))
        );
    }

    #[test]
    fn stuck_calls_do_not_grow_the_pool() {
        let timed = TimedEphemeris::with_workers(
            Arc::new(Slow(Duration::from_millis(300))),
            Duration::from_millis(10),
            1,
        )
        .unwrap();
        // The single worker is busy; later calls queue and still time out.
        for _ in 0..3 {
            let err = timed.calc(1.0, Body::Sun, CalcFlags::default()).unwrap_err();
            assert_eq!(err, EphemerisError::Timeout { millis: 10 });
        }
    }

    #[test]
    fn refuses_to_block_inside_async_runtime() {
        let timed = TimedEphemeris::new(Slow(Duration::ZERO), Duration::from_secs(5)).unwrap();
        let rt = Builder::new_current_thread().build().unwrap();
        let err = rt.block_on(async { timed.calc(1.0, Body::Sun, CalcFlags::default()) });
        assert!(matches!(err, Err(EphemerisError::Internal(_))));
    }
}
