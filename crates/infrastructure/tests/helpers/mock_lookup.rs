#![allow(dead_code)]
use async_trait::async_trait;
use portare_dns_application::ports::ZoneLookup;
use portare_dns_domain::{DomainError, RecordSet, RecordType, Zone};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Lookup double that counts calls and either fails or stalls.
pub struct CountingLookup {
    calls: AtomicUsize,
    fail: bool,
    delay: Option<Duration>,
}

impl CountingLookup {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
            delay: None,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
            delay: None,
        })
    }

    pub fn stalling(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
            delay: Some(delay),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn call(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(DomainError::LookupFailed("backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ZoneLookup for CountingLookup {
    async fn find_zone(&self, _name: &str) -> Result<Option<Arc<Zone>>, DomainError> {
        self.call().await?;
        Ok(None)
    }

    async fn find_record_set(
        &self,
        _name: &str,
        _record_type: RecordType,
    ) -> Result<Option<RecordSet>, DomainError> {
        self.call().await?;
        Ok(None)
    }
}

/// Delegates to `inner`, sleeping first whenever `find_zone` is asked for `slow_zone`.
pub struct DelayedZoneLookup<L> {
    inner: Arc<L>,
    slow_zone: String,
    delay: Duration,
}

impl<L> DelayedZoneLookup<L> {
    pub fn new(inner: Arc<L>, slow_zone: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner,
            slow_zone: slow_zone.to_string(),
            delay,
        })
    }
}

#[async_trait]
impl<L: ZoneLookup + 'static> ZoneLookup for DelayedZoneLookup<L> {
    async fn find_zone(&self, name: &str) -> Result<Option<Arc<Zone>>, DomainError> {
        if name == self.slow_zone {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.find_zone(name).await
    }

    async fn find_record_set(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<RecordSet>, DomainError> {
        self.inner.find_record_set(name, record_type).await
    }
}
