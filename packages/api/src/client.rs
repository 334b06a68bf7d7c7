//! # ApiClient — the interceptor pipeline
//!
//! Every endpoint function funnels through [`ApiClient::envelope`], which runs
//! the same three steps in order:
//!
//! 1. **request stage** — resolve `base_url + path`, set the JSON content
//!    type, attach `Authorization: Bearer <token>` when the [`Session`] holds
//!    a token, log the outgoing call at `debug`;
//! 2. **send** through the [`Transport`];
//! 3. **response stage** — classify the outcome ([`crate::classify`]). On
//!    success the decoded [`Envelope`] is returned. On failure the user is
//!    notified once through [`ClientHooks`]; an auth failure additionally
//!    clears the session locally and redirects to the login page.
//!
//! The forced logout on 401 never calls `/auth/logout`: the server has
//! already rejected the token, and a remote logout would only produce a
//! second 401.

use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::config::ApiConfig;

use crate::classify::{classify_business, classify_http, classify_transport};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::guard::LOGIN_PATH;
use crate::hooks::{ClientHooks, Notice};
use crate::session::Session;
use crate::transport::{HttpRequest, Method, Transport};

pub const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// An endpoint call before the request stage has run.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append query parameters from any struct or map that serializes to a
    /// JSON object. `null` fields are skipped.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self, ApiError> {
        let value = serde_json::to_value(params).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    match value {
                        Value::Null => {}
                        Value::String(s) => self.query.push((key, s)),
                        other => self.query.push((key, other.to_string())),
                    }
                }
                Ok(self)
            }
            Value::Null => Ok(self),
            other => Err(ApiError::InvalidRequest(format!(
                "query parameters must be an object, got {other}"
            ))),
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

struct Inner<T> {
    transport: T,
    base_url: String,
    timeout: Duration,
    session: Session,
    hooks: Rc<dyn ClientHooks>,
}

/// Cheap-clone HTTP client with the request/response interceptors built in.
pub struct ApiClient<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: &ApiConfig, session: Session, hooks: Rc<dyn ClientHooks>) -> Self {
        Self {
            inner: Rc::new(Inner {
                transport,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                timeout: Duration::from_millis(config.timeout_ms),
                session,
                hooks,
            }),
        }
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.inner.hooks.notify(notice);
    }

    /// Request stage.
    fn prepare(&self, request: ApiRequest) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())];
        if let Some(token) = self.inner.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let path = if request.path.starts_with('/') {
            request.path
        } else {
            format!("/{}", request.path)
        };

        tracing::debug!(
            "sending request: {} {} {:?} {:?}",
            request.method.as_str(),
            path,
            request.query,
            request.body
        );

        HttpRequest {
            method: request.method,
            url: format!("{}{}", self.inner.base_url, path),
            headers,
            query: request.query,
            body: request.body,
            timeout: self.inner.timeout,
        }
    }

    /// Response stage failure handling: notify once, force logout on 401.
    fn fail<R>(&self, err: ApiError) -> Result<R, ApiError> {
        tracing::warn!("request failed: {}", err);
        self.notify(Notice::error(err.user_message()));
        if err.is_auth_failure() {
            self.inner.session.clear();
            self.inner.hooks.redirect(LOGIN_PATH);
        }
        Err(err)
    }

    /// Run the full pipeline and return the decoded envelope.
    pub async fn envelope<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Envelope<R>, ApiError> {
        let http = self.prepare(request);
        let url = http.url.clone();

        let response = match self.inner.transport.send(http).await {
            Ok(response) => response,
            Err(err) => return self.fail(classify_transport(&err)),
        };

        if !response.is_success() {
            return self.fail(classify_http(response.status, &response.body));
        }

        let envelope: Envelope<R> = match serde_json::from_str(&response.body) {
            Ok(envelope) => envelope,
            Err(e) => return self.fail(ApiError::Decode(e.to_string())),
        };
        tracing::debug!("received response: {} code={} {:?}", url, envelope.code, envelope.message);

        match classify_business(envelope.code, envelope.message.as_deref()) {
            None => Ok(envelope),
            Some(err) => self.fail(err),
        }
    }

    /// Run the pipeline and return `data`, which must be present.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        match self.envelope::<R>(request).await?.data {
            Some(data) => Ok(data),
            None => self.fail(ApiError::MissingData),
        }
    }

    /// Run the pipeline, discarding `data`.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.envelope::<Value>(request).await.map(|_| ())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport and recording hooks shared by the crate's tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use serde_json::Value;
    use store::config::ApiConfig;
    use store::MemoryStore;

    use super::ApiClient;
    use crate::hooks::{ClientHooks, Notice, NoticeLevel};
    use crate::session::Session;
    use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

    #[derive(Clone, Default)]
    pub struct MockTransport {
        replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
        pub sent: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl MockTransport {
        pub fn reply(&self, status: u16, body: Value) -> &Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
            self.replies.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, err: TransportError) -> &Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        pub fn last(&self) -> HttpRequest {
            self.sent.borrow().last().cloned().expect("no request sent")
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Other("no scripted reply".into())))
        }
    }

    #[derive(Default)]
    pub struct RecordingHooks {
        pub notices: RefCell<Vec<Notice>>,
        pub redirects: RefCell<Vec<String>>,
    }

    impl RecordingHooks {
        pub fn errors(&self) -> Vec<String> {
            self.messages(NoticeLevel::Error)
        }

        pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
            self.notices
                .borrow()
                .iter()
                .filter(|n| n.level == level)
                .map(|n| n.message.clone())
                .collect()
        }
    }

    impl ClientHooks for RecordingHooks {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn redirect(&self, path: &str) {
            self.redirects.borrow_mut().push(path.to_string());
        }
    }

    pub struct Harness {
        pub client: ApiClient<MockTransport>,
        pub transport: MockTransport,
        pub hooks: Rc<RecordingHooks>,
        pub storage: MemoryStore,
    }

    pub fn harness() -> Harness {
        let storage = MemoryStore::new();
        let transport = MockTransport::default();
        let hooks = Rc::new(RecordingHooks::default());
        let session = Session::restore(Rc::new(storage.clone()));
        let client = ApiClient::new(transport.clone(), &ApiConfig::default(), session, hooks.clone());
        Harness {
            client,
            transport,
            hooks,
            storage,
        }
    }

    pub fn ok(data: Value) -> Value {
        serde_json::json!({"code": 200, "message": "ok", "data": data})
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::classify::messages;
    use crate::session::LoginGrant;
    use crate::transport::TransportError;
    use serde_json::json;
    use store::session::{TOKEN_KEY, USER_INFO_KEY};
    use store::{KeyValueStore, UserProfile};

    fn logged_in(h: &Harness) {
        h.client.session().establish(LoginGrant {
            token: "tok".into(),
            user_info: UserProfile::new().with("username", "admin"),
            ..LoginGrant::default()
        });
    }

    #[tokio::test]
    async fn test_request_stage_attaches_bearer_token() {
        let h = harness();
        h.transport.reply(200, ok(json!(1)));
        h.transport.reply(200, ok(json!(2)));

        let _: u32 = h.client.fetch(ApiRequest::get("/basic/grade/1")).await.unwrap();
        let first = h.transport.last();
        assert_eq!(first.url, "/api/basic/grade/1");
        assert!(first.header("Authorization").is_none());
        assert_eq!(first.header("Content-Type"), Some(CONTENT_TYPE));

        logged_in(&h);
        let _: u32 = h.client.fetch(ApiRequest::get("basic/grade/2")).await.unwrap();
        let second = h.transport.last();
        assert_eq!(second.url, "/api/basic/grade/2");
        assert_eq!(second.header("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_query_and_body_pass_through() {
        let h = harness();
        h.transport.reply(200, ok(Value::Null));

        let req = ApiRequest::put("/basic/grade/3")
            .query(&json!({"status": 0, "skip": null, "name": "G1"}))
            .unwrap()
            .json(&json!({"gradeName": "Grade 1"}))
            .unwrap();
        h.client.execute(req).await.unwrap();

        let sent = h.transport.last();
        assert!(sent.query.contains(&("status".into(), "0".into())));
        assert!(sent.query.contains(&("name".into(), "G1".into())));
        assert!(!sent.query.iter().any(|(k, _)| k == "skip"));
        assert_eq!(sent.body, Some(json!({"gradeName": "Grade 1"})));
    }

    #[tokio::test]
    async fn test_query_rejects_non_objects() {
        assert!(ApiRequest::get("/x").query(&json!([1, 2])).is_err());
        assert!(ApiRequest::get("/x").query(&Value::Null).unwrap().query.is_empty());
    }

    #[tokio::test]
    async fn test_business_401_clears_session_and_redirects() {
        let h = harness();
        logged_in(&h);
        h.transport.reply(200, json!({"code": 401, "message": "token expired"}));

        let err = h.client.execute(ApiRequest::get("/auth/current")).await.unwrap_err();

        assert!(err.is_auth_failure());
        assert!(!h.client.session().is_logged_in());
        assert!(h.client.session().profile().is_none());
        assert!(h.storage.get(TOKEN_KEY).is_none());
        assert!(h.storage.get(USER_INFO_KEY).is_none());
        assert_eq!(*h.hooks.redirects.borrow(), vec!["/login".to_string()]);
        assert_eq!(h.hooks.errors(), vec![messages::SESSION_EXPIRED.to_string()]);
        // No remote logout on a forced logout.
        assert_eq!(h.transport.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_http_401_behaves_like_business_401() {
        let h = harness();
        logged_in(&h);
        h.transport.reply_raw(401, "");

        let err = h.client.execute(ApiRequest::get("/basic/grade/all")).await.unwrap_err();
        assert!(err.is_auth_failure());
        assert!(!h.client.session().is_logged_in());
        assert_eq!(*h.hooks.redirects.borrow(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_business_403_keeps_session() {
        let h = harness();
        logged_in(&h);
        h.transport.reply(200, json!({"code": 403, "message": "nope"}));

        let err = h.client.execute(ApiRequest::delete("/basic/grade/1")).await.unwrap_err();
        assert_eq!(err, ApiError::Forbidden { message: "nope".into() });
        assert!(h.client.session().is_logged_in());
        assert!(h.hooks.redirects.borrow().is_empty());
        assert_eq!(h.hooks.errors(), vec![messages::FORBIDDEN.to_string()]);
    }

    #[tokio::test]
    async fn test_other_business_codes_surface_server_message() {
        let h = harness();
        h.transport.reply(200, json!({"code": 500, "message": "Grade code already exists"}));
        h.transport.reply(200, json!({"code": 500}));

        let first = h.client.execute(ApiRequest::post("/basic/grade")).await.unwrap_err();
        let second = h.client.execute(ApiRequest::post("/basic/grade")).await.unwrap_err();

        assert_eq!(first.user_message(), "Grade code already exists");
        assert_eq!(second.user_message(), messages::OPERATION_FAILED);
        assert_eq!(h.hooks.errors().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_failures_notify_fixed_strings() {
        let h = harness();
        h.transport.fail(TransportError::Timeout);
        h.transport.fail(TransportError::Network("connection refused".into()));
        h.transport.reply_raw(500, "<html>oops</html>");
        h.transport.reply_raw(200, "not json");

        for _ in 0..4 {
            assert!(h.client.execute(ApiRequest::get("/basic/grade/all")).await.is_err());
        }
        assert_eq!(
            h.hooks.errors(),
            vec![
                messages::TIMEOUT.to_string(),
                messages::NETWORK.to_string(),
                messages::SERVER_ERROR.to_string(),
                messages::REQUEST_FAILED.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_requires_data() {
        let h = harness();
        h.transport.reply(200, json!({"code": 200, "message": "ok", "data": null}));

        let err = h.client.fetch::<u32>(ApiRequest::get("/basic/grade/9")).await.unwrap_err();
        assert_eq!(err, ApiError::MissingData);
    }

    #[tokio::test]
    async fn test_envelope_exposes_message() {
        let h = harness();
        h.transport.reply(200, json!({"code": 200, "message": "Saved", "data": [1, 2]}));

        let env = h.client.envelope::<Vec<u32>>(ApiRequest::post("/grade/score/batch")).await.unwrap();
        assert_eq!(env.message.as_deref(), Some("Saved"));
        assert_eq!(env.data, Some(vec![1, 2]));
        assert!(h.hooks.notices.borrow().is_empty());
    }
}
