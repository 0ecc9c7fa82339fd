use crate::ports::outbound::{RegistryClient, RegistryLicenseData};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for registry responses
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    package_name: String,
    version: String,
}

impl CacheKey {
    fn new(package_name: &str, version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            version: version.to_string(),
        }
    }
}

/// CachingRegistryClient wraps a RegistryClient and adds in-memory caching.
///
/// Analyzer results can list the same coordinate more than once (e.g. the
/// same package reachable through several projects); the decorator makes
/// sure each coordinate hits the registry at most once per run. Only
/// successful responses are cached, so a transient failure does not stick.
/// The cache is thread-safe and shared across concurrent fetches.
pub struct CachingRegistryClient<R: RegistryClient> {
    inner: R,
    cache: Arc<DashMap<CacheKey, RegistryLicenseData>>,
}

impl<R: RegistryClient> CachingRegistryClient<R> {
    /// Creates a new caching client wrapping the given inner client
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: RegistryClient> RegistryClient for CachingRegistryClient<R> {
    async fn fetch_license(
        &self,
        package_name: &str,
        version: &str,
    ) -> Result<RegistryLicenseData> {
        let key = CacheKey::new(package_name, version);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let data = self.inner.fetch_license(package_name, version).await?;

        self.cache.insert(key, data.clone());

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock client that tracks call counts
    struct CountingClient {
        call_count: AtomicUsize,
        fail: bool,
    }

    impl CountingClient {
        fn new(fail: bool) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RegistryClient for CountingClient {
        async fn fetch_license(
            &self,
            package_name: &str,
            _version: &str,
        ) -> Result<RegistryLicenseData> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("simulated registry failure");
            }
            Ok(RegistryLicenseData {
                license: Some(format!("{}-license", package_name)),
                license_expression: Some("MIT".to_string()),
                classifiers: vec!["License :: OSI Approved :: MIT License".to_string()],
                ..RegistryLicenseData::default()
            })
        }
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let caching = CachingRegistryClient::new(CountingClient::new(false));

        let first = caching.fetch_license("requests", "2.31.0").await.unwrap();
        let second = caching.fetch_license("requests", "2.31.0").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(caching.inner.calls(), 1);
        assert_eq!(caching.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_different_versions_are_cached_separately() {
        let caching = CachingRegistryClient::new(CountingClient::new(false));

        caching.fetch_license("requests", "2.31.0").await.unwrap();
        caching.fetch_license("requests", "2.32.0").await.unwrap();

        assert_eq!(caching.inner.calls(), 2);
        assert_eq!(caching.cache_size(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let caching = CachingRegistryClient::new(CountingClient::new(true));

        assert!(caching.fetch_license("requests", "2.31.0").await.is_err());
        assert!(caching.fetch_license("requests", "2.31.0").await.is_err());

        assert_eq!(caching.inner.calls(), 2);
        assert_eq!(caching.cache_size(), 0);
    }
}
