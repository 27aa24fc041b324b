#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use relay_core::{ChatResponse, UpstreamRequest};
use relay_llm::{LLMError, LLMProvider, Result};

type Reply = Box<dyn Fn() -> Result<ChatResponse> + Send + Sync>;

/// Mock upstream that records every request it receives
pub struct MockProvider {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<UpstreamRequest>>,
}

impl MockProvider {
    pub fn new(reply: impl Fn() -> Result<ChatResponse> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Always answer with a single assistant choice
    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::new(move || Ok(ChatResponse::from_reply(text.clone())))
    }

    /// Answer with `{"choices": []}`
    pub fn no_choices() -> Arc<Self> {
        Self::new(|| Ok(ChatResponse { choices: vec![] }))
    }

    pub fn failing(make_error: fn() -> LLMError) -> Arc<Self> {
        Self::new(move || Err(make_error()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<UpstreamRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LLMProvider for MockProvider {
    fn provider_id(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn chat(&self, request: &UpstreamRequest) -> Result<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        (self.reply)()
    }
}
