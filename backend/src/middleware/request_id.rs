//! Request tracing middleware.
//!
//! Every incoming request gets a UUID held in task-local storage for the
//! duration of handling. Log lines emitted anywhere below the middleware
//! can correlate on it, and the identifier is echoed back to the client
//! in an `x-request-id` header. Because failures ride on 200 responses
//! (see `inbound::http::error`), this identifier is what lets operators
//! line a client-reported error up with the server logs.
//!
//! Task-local values do not cross `tokio::spawn` boundaries; use
//! [`RequestId::scope`] when handing work to another task.

use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::future::Future;
use tokio::task_local;
use tracing::info;
use uuid::Uuid;

task_local! {
    static REQUEST_ID: RequestId;
}

/// Per-request identifier exposed via task-local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the request currently being handled, if any.
    pub fn current() -> Option<Self> {
        REQUEST_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with the given identifier in scope.
    pub async fn scope<Fut>(id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_ID.scope(id, fut).await
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Middleware attaching a request-scoped UUID and logging each handled
/// request on completion.
#[derive(Clone)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestTrace`].
pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let id = RequestId::generate();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = self.service.call(req);

        Box::pin(RequestId::scope(id, async move {
            let mut res = fut.await?;
            if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
                res.response_mut()
                    .headers_mut()
                    .insert(HeaderName::from_static("x-request-id"), value);
            }
            info!(
                request_id = %id,
                method = %method,
                path = %path,
                status = res.status().as_u16(),
                "request handled"
            );
            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[tokio::test]
    async fn current_is_none_outside_a_request() {
        assert!(RequestId::current().is_none());
    }

    #[tokio::test]
    async fn scope_exposes_the_identifier() {
        let id = RequestId::generate();
        let observed = RequestId::scope(id, async move { RequestId::current() }).await;
        assert_eq!(observed, Some(id));
    }

    #[actix_web::test]
    async fn responses_carry_the_request_id_header() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTrace)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let header = res
            .headers()
            .get("x-request-id")
            .expect("header present")
            .to_str()
            .expect("ascii header");
        Uuid::parse_str(header).expect("header is a UUID");
    }

    #[actix_web::test]
    async fn handlers_observe_the_same_identifier() {
        let app = test::init_service(App::new().wrap(RequestTrace).route(
            "/",
            web::get().to(|| async {
                let id = RequestId::current().expect("id in scope");
                HttpResponse::Ok().body(id.to_string())
            }),
        ))
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let header = res
            .headers()
            .get("x-request-id")
            .expect("header present")
            .to_str()
            .expect("ascii header")
            .to_owned();
        let body = test::read_body(res).await;
        assert_eq!(header.as_bytes(), &body[..]);
    }
}
