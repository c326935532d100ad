#![allow(dead_code)]

use async_trait::async_trait;
use dnsview_application::ports::{RecordsRepository, ResolverScript, ScriptRun};
use dnsview_domain::{DomainError, DomainName, ResolutionTable};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockRecordsRepository {
    response: Arc<RwLock<Result<ResolutionTable, DomainError>>>,
    loads: Arc<AtomicUsize>,
}

impl MockRecordsRepository {
    pub fn with_table(table: ResolutionTable) -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(table))),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Arc::new(RwLock::new(Err(error))),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_table(&self, table: ResolutionTable) {
        *self.response.write().await = Ok(table);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordsRepository for MockRecordsRepository {
    async fn load(&self) -> Result<ResolutionTable, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.response.read().await.clone()
    }
}

/// Records every invocation and answers with a preset result.
#[derive(Clone)]
pub struct MockResolverScript {
    response: Arc<RwLock<Result<ScriptRun, DomainError>>>,
    calls: Arc<RwLock<Vec<String>>>,
    delay: Option<Duration>,
    running: Arc<AtomicUsize>,
    max_running: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl MockResolverScript {
    pub fn succeeding() -> Self {
        Self::with_response(Ok(ScriptRun::succeeded("resolved\n")))
    }

    pub fn exiting_with(code: i32) -> Self {
        Self::with_response(Ok(ScriptRun::failed(Some(code), "Traceback ...\n")))
    }

    pub fn erroring(error: DomainError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<ScriptRun, DomainError>) -> Self {
        Self {
            response: Arc::new(RwLock::new(response)),
            calls: Arc::new(RwLock::new(Vec::new())),
            delay: None,
            running: Arc::new(AtomicUsize::new(0)),
            max_running: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    /// Highest number of runs observed in flight at the same time.
    pub fn max_concurrent_runs(&self) -> usize {
        self.max_running.load(Ordering::SeqCst)
    }

    /// Runs that got past their delay.
    pub fn completed_runs(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolverScript for MockResolverScript {
    async fn run(&self, domain: &DomainName) -> Result<ScriptRun, DomainError> {
        self.calls.write().await.push(domain.as_str().to_string());

        let now_running = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_running.fetch_max(now_running, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.running.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.response.read().await.clone()
    }
}
