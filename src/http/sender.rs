use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;
use chrono::Utc;
use futures_util::StreamExt;
use reqwest::{Client, Response, StatusCode, header::CONTENT_TYPE};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::pool::RequestPool;
use crate::recorder::{LatencyRecorder, LatencySample, Method, Outcome};
use crate::run::{BaseUrl, InflightTracker};

pub const OCSP_REQUEST_CONTENT_TYPE: &str = "application/ocsp-request";

/// Everything a send needs. Cloning is cheap; all members are shared.
#[derive(Clone)]
pub struct SendContext {
    client: Client,
    pool: Arc<RequestPool>,
    base_url: BaseUrl,
    recorder: Arc<dyn LatencyRecorder>,
}

impl SendContext {
    #[must_use]
    pub fn new(
        client: Client,
        pool: Arc<RequestPool>,
        base_url: BaseUrl,
        recorder: Arc<dyn LatencyRecorder>,
    ) -> Self {
        Self {
            client,
            pool,
            base_url,
            recorder,
        }
    }
}

/// Issues one request built from a random pool entry and records exactly one
/// sample for it, whatever happens.
///
/// `finished` is taken as soon as the response head arrives; the body drain
/// that follows only affects the outcome label.
pub async fn send(method: Method, ctx: &SendContext) -> LatencySample {
    let picked = {
        let mut rng = rand::thread_rng();
        ctx.pool.pick(&mut rng).map(|request| request.to_bytes())
    };

    let Some(body) = picked else {
        warn!("[FAILED] {}: request pool is empty", method);
        let now = Utc::now();
        return finish(ctx, method, now, now, Outcome::Error);
    };

    let started = Utc::now();
    let result = match method {
        Method::Get => get(ctx, &body).await,
        Method::Post => post(ctx, body).await,
    };
    let finished = Utc::now();

    let outcome = match result {
        Err(err) => {
            warn!("[FAILED] {}: {}", method, err);
            Outcome::Error
        }
        Ok(response) if response.status() != StatusCode::OK => {
            warn!(
                "[FAILED] {}: unexpected status code {}",
                method,
                response.status().as_u16()
            );
            Outcome::UnexpectedStatus
        }
        Ok(response) => match drain_response_body(response).await {
            Ok(()) => Outcome::Good,
            Err(err) => {
                warn!("[FAILED] {}: failed to read body: {}", method, err);
                Outcome::ReadError
            }
        },
    };

    finish(ctx, method, started, finished, outcome)
}

/// Spawns [`send`] detached. The tracker counts it until the task ends,
/// including when it panics.
pub fn spawn_send(
    method: Method,
    ctx: &SendContext,
    tracker: &Arc<InflightTracker>,
) -> JoinHandle<()> {
    let guard = tracker.acquire();
    let ctx = ctx.clone();
    tokio::spawn(async move {
        let _guard = guard;
        send(method, &ctx).await;
    })
}

async fn get(ctx: &SendContext, body: &Bytes) -> Result<Response, reqwest::Error> {
    let url = ctx.base_url.join_raw(&STANDARD.encode(body));
    ctx.client.get(url).send().await
}

async fn post(ctx: &SendContext, body: Bytes) -> Result<Response, reqwest::Error> {
    ctx.client
        .post(ctx.base_url.as_str())
        .header(CONTENT_TYPE, OCSP_REQUEST_CONTENT_TYPE)
        .body(body)
        .send()
        .await
}

async fn drain_response_body(response: Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}

fn finish(
    ctx: &SendContext,
    method: Method,
    started: chrono::DateTime<Utc>,
    finished: chrono::DateTime<Utc>,
    outcome: Outcome,
) -> LatencySample {
    let sample = LatencySample {
        method,
        started,
        finished,
        outcome,
    };
    ctx.recorder.record(sample.clone());
    sample
}
