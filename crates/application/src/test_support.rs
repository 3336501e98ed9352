//! In-memory doubles shared by the unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use planeats_domain::{Headers, ResponseSpec, SessionClaims};

use crate::ports::{
    Clock, CredentialSource, HttpClient, HttpClientError, HttpRequest, SessionCodec,
    SessionCodecError,
};

type Scripted = Result<ResponseSpec, HttpClientError>;

/// Answers requests from a queue and records what was sent.
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(responses: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::Other("no scripted response".to_string())));
        Box::pin(async move { next })
    }
}

pub fn json_response(status: u16, body: &str) -> ResponseSpec {
    let headers: Headers = [("content-type", "application/json")].into_iter().collect();
    ResponseSpec::new(status, headers, body.as_bytes().to_vec(), Duration::from_millis(3))
}

pub fn text_response(status: u16, body: &str) -> ResponseSpec {
    let headers: Headers = [("content-type", "text/plain")].into_iter().collect();
    ResponseSpec::new(status, headers, body.as_bytes().to_vec(), Duration::from_millis(3))
}

/// A fixed bearer token.
pub struct StaticCredentials(String);

impl StaticCredentials {
    pub fn new(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl CredentialSource for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A clock the test moves by hand.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn at(y: i32, m: u32, d: u32) -> Arc<Self> {
        Arc::new(Self(Mutex::new(
            Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        )))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Plain JSON "sealing" so provider tests do not depend on real crypto.
pub struct PlainCodec;

impl SessionCodec for PlainCodec {
    fn seal(&self, claims: &SessionClaims) -> Result<String, SessionCodecError> {
        serde_json::to_string(claims).map_err(|e| SessionCodecError::Seal(e.to_string()))
    }

    fn open(&self, token: &str) -> Result<SessionClaims, SessionCodecError> {
        serde_json::from_str(token).map_err(|_| SessionCodecError::Verification)
    }
}
