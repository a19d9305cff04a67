use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;

use crate::error::BoxError;

use super::transport::{Transport, TransportResponse};

/// One canned reply of a [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub(crate) enum ScriptedReply {
    /// The request fails before any response head.
    Refused(&'static str),
    /// A response whose body arrives in `chunks`, optionally breaking off
    /// with `cut` after the last chunk. `latency` elapses before the head.
    Body {
        status: u16,
        chunks: Vec<usize>,
        cut: Option<&'static str>,
        latency: Duration,
    },
}

impl ScriptedReply {
    pub(crate) fn ok(bytes: usize) -> Self {
        ScriptedReply::Body {
            status: 200,
            chunks: vec![bytes],
            cut: None,
            latency: Duration::ZERO,
        }
    }

    pub(crate) fn ok_after(bytes: usize, latency: Duration) -> Self {
        ScriptedReply::Body {
            status: 200,
            chunks: vec![bytes],
            cut: None,
            latency,
        }
    }
}

/// Replays scripted replies in order and records every requested URL.
/// An exhausted script refuses further requests.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = ScriptedReply>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, BoxError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_owned());
        }
        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front())
            .unwrap_or(ScriptedReply::Refused("script exhausted"));

        match reply {
            ScriptedReply::Refused(reason) => Err(reason.into()),
            ScriptedReply::Body {
                status,
                chunks,
                cut,
                latency,
            } => {
                if !latency.is_zero() {
                    tokio::time::sleep(latency).await;
                }
                let content_length = u64::try_from(chunks.iter().sum::<usize>()).ok();
                let mut items: Vec<Result<Bytes, BoxError>> = chunks
                    .into_iter()
                    .map(|len| Ok(Bytes::from(vec![0_u8; len])))
                    .collect();
                if let Some(reason) = cut {
                    items.push(Err(reason.into()));
                }
                Ok(TransportResponse {
                    status,
                    content_length,
                    body: futures_util::stream::iter(items).boxed(),
                })
            }
        }
    }
}
