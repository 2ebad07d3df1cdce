#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use caremate::completion::CompletionClient;
use caremate::error::CompanionError;
use caremate::store::{KeyValueStore, StoreError};
use caremate::types::ContextMessage;

/// In-memory key-value store for tests; writes can be switched off to
/// exercise the best-effort persistence path.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("writes disabled")));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// One recorded `complete` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub history: Vec<ContextMessage>,
}

/// Scripted completion client: replies (or errors) are consumed in order,
/// and every call is recorded for inspection.
#[derive(Default)]
pub struct StubCompletionClient {
    replies: Mutex<VecDeque<Result<String, CompanionError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn with_error(self, err: CompanionError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        history: &[ContextMessage],
    ) -> Result<String, CompanionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            history: history.to_vec(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("okay".to_string()))
    }
}
