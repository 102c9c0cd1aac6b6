// src/presentation/http/middleware/recycle.rs
//! Process recycling after a bounded number of requests.
//!
//! Once the budget is spent the server drains and exits so the supervisor can
//! start a fresh process. A random jitter on the limit keeps sibling processes
//! from all restarting at the same moment.
use crate::config::ServerConfig;
use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use rand::Rng;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct RequestBudget {
    inner: Arc<BudgetState>,
}

#[derive(Debug)]
struct BudgetState {
    limit: Option<u64>,
    served: AtomicU64,
    exhausted: watch::Sender<bool>,
}

impl RequestBudget {
    pub fn unlimited() -> Self {
        Self::with_limit(None)
    }

    pub fn with_limit(limit: Option<u64>) -> Self {
        let (exhausted, _) = watch::channel(false);
        Self {
            inner: Arc::new(BudgetState {
                limit,
                served: AtomicU64::new(0),
                exhausted,
            }),
        }
    }

    /// `max_requests` plus a uniform draw from `0..=max_requests_jitter`.
    pub fn from_config(server: &ServerConfig) -> Self {
        if server.max_requests == 0 {
            return Self::unlimited();
        }
        let jitter = if server.max_requests_jitter == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=server.max_requests_jitter)
        };
        Self::with_limit(Some(server.max_requests.saturating_add(jitter)))
    }

    pub fn limit(&self) -> Option<u64> {
        self.inner.limit
    }

    pub fn served(&self) -> u64 {
        self.inner.served.load(Ordering::Relaxed)
    }

    /// Counts one finished request. Returns `true` only for the request that
    /// spends the last unit of the budget.
    pub fn record(&self) -> bool {
        let served = self.inner.served.fetch_add(1, Ordering::Relaxed) + 1;
        match self.inner.limit {
            Some(limit) if served == limit => {
                self.inner.exhausted.send_replace(true);
                true
            }
            _ => false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        *self.inner.exhausted.borrow()
    }

    /// Resolves once the budget is spent. Never resolves for an unlimited budget.
    pub async fn exhausted(&self) {
        let mut rx = self.inner.exhausted.subscribe();
        let outcome = rx.wait_for(|done| *done).await.map(|_| ());
        if outcome.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

pub async fn track_request_budget(
    State(budget): State<RequestBudget>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if budget.record() {
        tracing::info!(
            served = budget.served(),
            "max requests reached, recycling after in-flight requests finish"
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn only_the_last_request_exhausts_the_budget() {
        let budget = RequestBudget::with_limit(Some(3));
        assert!(!budget.record());
        assert!(!budget.record());
        assert!(!budget.is_exhausted());
        assert!(budget.record());
        assert!(budget.is_exhausted());
        assert!(!budget.record());
        assert_eq!(budget.served(), 4);
    }

    #[test]
    fn unlimited_budget_never_exhausts() {
        let budget = RequestBudget::unlimited();
        for _ in 0..1000 {
            assert!(!budget.record());
        }
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn limit_is_max_requests_plus_bounded_jitter() {
        let server = ServerConfig {
            max_requests: 5000,
            max_requests_jitter: 500,
            ..ServerConfig::default()
        };
        for _ in 0..50 {
            let limit = RequestBudget::from_config(&server).limit().unwrap();
            assert!((5000..=5500).contains(&limit));
        }

        let exact = ServerConfig {
            max_requests: 10,
            max_requests_jitter: 0,
            ..ServerConfig::default()
        };
        assert_eq!(RequestBudget::from_config(&exact).limit(), Some(10));
    }

    #[test]
    fn zero_max_requests_disables_recycling() {
        let server = ServerConfig {
            max_requests: 0,
            ..ServerConfig::default()
        };
        assert_eq!(RequestBudget::from_config(&server).limit(), None);
    }

    #[tokio::test]
    async fn exhausted_wakes_waiters() {
        let budget = RequestBudget::with_limit(Some(1));
        let waiter = {
            let budget = budget.clone();
            tokio::spawn(async move { budget.exhausted().await })
        };
        budget.record();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake")
            .expect("task should not panic");
    }
}
