//! In-process backends for orchestrator tests

use crate::backend::api::{
    BackendError, BackendResult, Envelope, FullProductRecord, ProductBackend, VerifyPayload,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted reply for one verify call
#[derive(Debug, Clone)]
pub enum Reply {
    /// Successful envelope echoing the requested id
    Authentic(bool),
    /// Exact envelope to return
    Envelope(Envelope<VerifyPayload>),
    /// Client-level failure
    Error(BackendError),
}

/// Backend answering verify calls from a script
///
/// When the script runs out, every call is answered as authentic.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Reply>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ProductBackend for ScriptedBackend {
    async fn verify(&self, product_id: &str) -> BackendResult<Envelope<VerifyPayload>> {
        self.requested.lock().unwrap().push(product_id.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Authentic(true));

        match reply {
            Reply::Authentic(is_authentic) => Ok(Envelope::success(VerifyPayload {
                product_id: product_id.to_string(),
                is_authentic,
            })),
            Reply::Envelope(envelope) => Ok(envelope),
            Reply::Error(error) => Err(error),
        }
    }

    async fn get(&self, _product_id: &str) -> BackendResult<Envelope<FullProductRecord>> {
        Ok(Envelope::failure(Some("not scripted".to_string())))
    }

    async fn register(
        &self,
        _product: &FullProductRecord,
    ) -> BackendResult<Envelope<FullProductRecord>> {
        Ok(Envelope::failure(Some("not scripted".to_string())))
    }
}

/// Backend that holds every verify call until released
#[derive(Debug, Default)]
pub struct GatedBackend {
    started: Notify,
    release: Notify,
    calls: AtomicUsize,
}

impl GatedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wait until a verify call has reached the backend
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Let one pending verify call complete
    pub fn release_one(&self) {
        self.release.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ProductBackend for GatedBackend {
    async fn verify(&self, product_id: &str) -> BackendResult<Envelope<VerifyPayload>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(Envelope::success(VerifyPayload {
            product_id: product_id.to_string(),
            is_authentic: true,
        }))
    }

    async fn get(&self, _product_id: &str) -> BackendResult<Envelope<FullProductRecord>> {
        Ok(Envelope::failure(None))
    }

    async fn register(
        &self,
        _product: &FullProductRecord,
    ) -> BackendResult<Envelope<FullProductRecord>> {
        Ok(Envelope::failure(None))
    }
}
