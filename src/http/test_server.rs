//! Minimal in-process HTTP responder for exercising sends and runs.
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};

const READ_CHUNK: usize = 4096;
const HEADER_END: &[u8] = b"\r\n\r\n";

#[derive(Clone, Copy, Debug)]
pub(crate) enum Reply {
    Ok,
    /// Same as `Ok`, after holding the connection for the given time.
    Delayed(Duration),
    Status(u16),
    /// Promises more body bytes than it sends, then hangs up.
    TruncatedBody,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub body: Vec<u8>,
}

pub(crate) struct Responder {
    addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    task: JoinHandle<()>,
}

impl Responder {
    pub(crate) async fn spawn(reply: Reply) -> AppResult<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let sink = Arc::clone(&sink);
                tokio::spawn(async move {
                    if let Some(request) = serve(stream, reply).await {
                        lock(&sink).push(request);
                    }
                });
            }
        });
        Ok(Self {
            addr,
            captured,
            task,
        })
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub(crate) fn requests(&self) -> Vec<CapturedRequest> {
        lock(&self.captured).clone()
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A base URL on a port nothing listens on.
pub(crate) async fn refused_base_url() -> AppResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

fn lock(captured: &Mutex<Vec<CapturedRequest>>) -> MutexGuard<'_, Vec<CapturedRequest>> {
    match captured.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

async fn serve(mut stream: TcpStream, reply: Reply) -> Option<CapturedRequest> {
    let request = read_request(&mut stream).await.ok()?;
    if let Reply::Delayed(delay) = reply {
        tokio::time::sleep(delay).await;
    }
    let response: Vec<u8> = match reply {
        Reply::Ok | Reply::Delayed(_) => b"HTTP/1.1 200 OK\r\nContent-Type: application/ocsp-response\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK".to_vec(),
        Reply::Status(code) => format!(
            "HTTP/1.1 {} Test\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            code
        )
        .into_bytes(),
        Reply::TruncatedBody => {
            b"HTTP/1.1 200 OK\r\nContent-Length: 64\r\nConnection: close\r\n\r\nshort".to_vec()
        }
    };
    drop(stream.write_all(&response).await);
    drop(stream.flush().await);
    drop(stream.shutdown().await);
    Some(request)
}

async fn read_request(stream: &mut TcpStream) -> AppResult<CapturedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    let header_end = loop {
        if let Some(pos) = buffer
            .windows(HEADER_END.len())
            .position(|window| window == HEADER_END)
        {
            break pos;
        }
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Err(AppError::validation("connection closed before headers"));
        }
        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());
    };

    let head = String::from_utf8_lossy(buffer.get(..header_end).unwrap_or_default()).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let mut request = CapturedRequest {
        method: request_line.next().unwrap_or_default().to_owned(),
        path: request_line.next().unwrap_or_default().to_owned(),
        ..CapturedRequest::default()
    };
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "content-length" => content_length = value.parse().unwrap_or(0),
            "content-type" => request.content_type = Some(value.to_owned()),
            "user-agent" => request.user_agent = Some(value.to_owned()),
            _ => {}
        }
    }

    let body_start = header_end.saturating_add(HEADER_END.len());
    let mut body = buffer.get(body_start..).unwrap_or_default().to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(chunk.get(..read).unwrap_or_default());
    }
    body.truncate(content_length);
    request.body = body;
    Ok(request)
}
