//! Request/response logging middleware.
//!
//! Emits `request` before the inner service runs and `response` after it
//! returns. The response level follows the status: 5xx error, 4xx warn,
//! anything else info.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::extract::ConnectInfo;
use axum::http::{header, Request, Response};
use futures_util::future::BoxFuture;
use http_body::Body as HttpBody;
use tower::{Layer, Service};

use crate::config::HttpLogConfig;
use crate::entry::Level;
use crate::logger::{LogContext, Logger, ERROR_FIELD};

/// Layer producing [`HttpLog`] services.
#[derive(Clone, Debug)]
pub struct HttpLogLayer {
    context: LogContext,
    exclude_path_prefixes: Arc<[String]>,
}

impl HttpLogLayer {
    pub fn new(logger: Logger) -> Self {
        Self::from_context(logger.context())
    }

    /// Log through `context`, keeping its fields on every entry.
    pub fn from_context(context: LogContext) -> Self {
        Self {
            context,
            exclude_path_prefixes: Arc::from(Vec::new()),
        }
    }

    pub fn from_config(logger: Logger, config: &HttpLogConfig) -> Self {
        config
            .exclude_path_prefixes
            .iter()
            .fold(Self::new(logger), |layer, prefix| layer.exclude_path_prefix(prefix.as_str()))
    }

    /// Skip logging for paths starting with `prefix`.
    pub fn exclude_path_prefix(self, prefix: impl Into<String>) -> Self {
        let mut prefixes = self.exclude_path_prefixes.to_vec();
        prefixes.push(prefix.into());
        Self {
            exclude_path_prefixes: prefixes.into(),
            ..self
        }
    }
}

impl<S> Layer<S> for HttpLogLayer {
    type Service = HttpLog<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLog {
            inner,
            context: self.context.clone(),
            exclude_path_prefixes: self.exclude_path_prefixes.clone(),
        }
    }
}

/// Middleware logging each request and its response.
///
/// A [`LogContext`] or [`Logger`] found in the request extensions takes
/// precedence over the one configured on the layer.
#[derive(Clone, Debug)]
pub struct HttpLog<S> {
    inner: S,
    context: LogContext,
    exclude_path_prefixes: Arc<[String]>,
}

impl<S> HttpLog<S> {
    fn is_excluded(&self, path: &str) -> bool {
        self.exclude_path_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLog<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: fmt::Display + 'static,
    ResBody: HttpBody + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // excluded paths are still served, just not logged
        if self.is_excluded(req.uri().path()) {
            return Box::pin(self.inner.call(req));
        }

        let ctx = request_context(&req)
            .unwrap_or_else(|| self.context.clone())
            .with_field("url", request_uri(&req))
            .with_field("method", req.method().as_str())
            .with_field("remoteAddr", remote_addr(&req));

        ctx.info("request");

        let start = Instant::now();
        let future = self.inner.call(req);

        Box::pin(async move {
            match future.await {
                Ok(res) => {
                    let status = res.status().as_u16();
                    ctx.with_field("status", status)
                        .with_field("size", response_size(&res))
                        .with_field("duration", elapsed_ms(start))
                        .log(response_level(status), "response");
                    Ok(res)
                }
                Err(err) => {
                    ctx.with_field("duration", elapsed_ms(start))
                        .with_field(ERROR_FIELD, err.to_string())
                        .error("response");
                    Err(err)
                }
            }
        })
    }
}

/// Level of the `response` entry for a status code.
pub fn response_level(status: u16) -> Level {
    match status {
        500.. => Level::Error,
        400..=499 => Level::Warn,
        _ => Level::Info,
    }
}

/// Per-request logging set up by an outer layer, if any.
fn request_context<B>(req: &Request<B>) -> Option<LogContext> {
    let extensions = req.extensions();
    extensions
        .get::<LogContext>()
        .cloned()
        .or_else(|| extensions.get::<Logger>().map(Logger::context))
}

/// Path and query only, also for absolute-form targets (HTTP/2, proxies).
fn request_uri<B>(req: &Request<B>) -> &str {
    req.uri().path_and_query().map_or("/", |pq| pq.as_str())
}

fn remote_addr<B>(req: &Request<B>) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default()
}

/// Body size when known up front, else the declared `Content-Length`, else 0.
fn response_size<B: HttpBody>(res: &Response<B>) -> u64 {
    res.body()
        .size_hint()
        .exact()
        .or_else(|| {
            res.headers()
                .get(header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        })
        .unwrap_or(0)
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
