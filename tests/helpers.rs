// Shared test helpers: fake source implementations for pipeline tests.
//
// Every external dependency of the analyzer has a configurable fake here so
// integration tests run without touching the network.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use netintel::analytics::NullSink;
use netintel::providers::{
    GeoProvider, ProviderResult, RegistryData, RegistrySource, SourceAggregator, SourceId,
    TorListSource, WeatherObservation, WeatherSource,
};
use netintel::{Analyzer, NameResolver};

/// Geolocation source with a canned answer and a call counter.
pub struct FakeGeo {
    source: SourceId,
    answer: Option<ProviderResult>,
    delay: Duration,
    calls: AtomicUsize,
}

#[allow(dead_code)] // Used by other test files
impl FakeGeo {
    pub fn answering(source: SourceId, build: impl FnOnce(&mut ProviderResult)) -> Arc<Self> {
        let mut result = ProviderResult::new(source);
        build(&mut result);
        Arc::new(FakeGeo {
            source,
            answer: Some(result),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(source: SourceId) -> Arc<Self> {
        Arc::new(FakeGeo {
            source,
            answer: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(source: SourceId, delay: Duration) -> Arc<Self> {
        Arc::new(FakeGeo {
            source,
            answer: Some(ProviderResult::new(source)),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeoProvider for FakeGeo {
    fn source(&self) -> SourceId {
        self.source
    }

    fn fetch<'a>(
        &'a self,
        _target: &'a str,
        _timeout: Duration,
    ) -> BoxFuture<'a, Option<ProviderResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.answer.clone()
        }
        .boxed()
    }
}

/// Registry source with a canned answer.
#[allow(dead_code)] // Used by other test files
pub struct FakeRegistry {
    pub answer: Option<RegistryData>,
}

impl RegistrySource for FakeRegistry {
    fn fetch<'a>(
        &'a self,
        _ip: &'a str,
        _timeout: Duration,
    ) -> BoxFuture<'a, Option<RegistryData>> {
        async move { self.answer.clone() }.boxed()
    }
}

/// Weather source that never answers.
#[allow(dead_code)] // Used by other test files
pub struct NoWeather;

impl WeatherSource for NoWeather {
    fn fetch(
        &self,
        _latitude: f64,
        _longitude: f64,
        _timeout: Duration,
    ) -> BoxFuture<'_, Option<WeatherObservation>> {
        async move { None }.boxed()
    }
}

/// Weather source with a fixed observation.
#[allow(dead_code)] // Used by other test files
pub struct FixedWeather;

impl WeatherSource for FixedWeather {
    fn fetch(
        &self,
        _latitude: f64,
        _longitude: f64,
        _timeout: Duration,
    ) -> BoxFuture<'_, Option<WeatherObservation>> {
        async move {
            Some(WeatherObservation {
                temperature: "21.3°C".to_string(),
                description: "Scattered Clouds".to_string(),
                humidity: "64%".to_string(),
                pressure: "1013 hPa".to_string(),
                wind_speed: "3.5 m/s".to_string(),
            })
        }
        .boxed()
    }
}

/// Tor list with a fixed membership answer.
#[allow(dead_code)] // Used by other test files
pub struct FixedTor(pub bool);

impl TorListSource for FixedTor {
    fn is_exit_node<'a>(&'a self, _ip: &'a str, _timeout: Duration) -> BoxFuture<'a, bool> {
        let answer = self.0;
        async move { answer }.boxed()
    }
}

/// Resolver with canned forward and reverse answers.
#[allow(dead_code)] // Used by other test files
pub struct FakeResolver {
    pub forward: Option<IpAddr>,
    pub ptr: Option<String>,
}

#[allow(dead_code)] // Used by other test files
impl FakeResolver {
    pub fn empty() -> Self {
        FakeResolver {
            forward: None,
            ptr: None,
        }
    }
}

impl NameResolver for FakeResolver {
    fn resolve<'a>(&'a self, _host: &'a str) -> BoxFuture<'a, Option<IpAddr>> {
        async move { self.forward }.boxed()
    }

    fn reverse<'a>(&'a self, _ip: IpAddr) -> BoxFuture<'a, Option<String>> {
        async move { self.ptr.clone() }.boxed()
    }
}

/// Builds an analyzer with the given geolocation sources and registry
/// answer, and inert fakes for everything else.
#[allow(dead_code)] // Used by other test files
pub fn analyzer_with(
    geo: Vec<Arc<dyn GeoProvider>>,
    registry: Option<RegistryData>,
    resolver: FakeResolver,
) -> Analyzer {
    Analyzer::from_parts(
        SourceAggregator::new(geo),
        Arc::new(FakeRegistry { answer: registry }),
        Arc::new(NoWeather),
        Arc::new(FixedTor(false)),
        Arc::new(resolver),
        Arc::new(NullSink),
        Duration::from_secs(1),
        Duration::from_secs(1),
    )
}
