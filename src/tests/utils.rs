use crate::advisor::{AdviceRequest, AdvisorError, NarrativeAdvisor};
use crate::app::App;
use crate::config::AppConfig;
use crate::errors::ResultResp;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

pub const CATALOG_CSV: &str = "\
Location Name,Address,Cuisine Compatibility,Image URL,Average Store Size (sq ft),Average Lease Rate ($/sq ft),Price Range,Vacancy Status
Plaza A,1 Main St,\"Italian, Casual Dining\",https://img/a.jpg,1500,2.5,$$,Available
Plaza B,2 Oak Ave,\"Mexican, Fast Food\",https://img/b.jpg,1200,3.0,$,Limited
Plaza C,3 Elm St,,https://img/c.jpg,1000,2.0,$$,Available
";

/// Plaza A only: 2024-01-01 is a Monday.
pub const TRAFFIC_CSV: &str = "\
Date,Business Corridor,Foot Traffic Volume
2024-01-01,Plaza A,100
2024-01-02,Plaza A,200
2024-01-08,Plaza A,300
2024-02-15,Plaza A,400
";

/// Answers every request with the same text and counts the calls.
pub struct CannedAdvisor {
    pub answer: String,
    pub calls: Arc<AtomicUsize>,
}

impl NarrativeAdvisor for CannedAdvisor {
    fn complete(&self, _request: &AdviceRequest) -> Result<String, AdvisorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

pub struct FailingAdvisor;

impl NarrativeAdvisor for FailingAdvisor {
    fn complete(&self, _request: &AdviceRequest) -> Result<String, AdvisorError> {
        Err(AdvisorError::Request("connection refused".to_string()))
    }
}

/// An app wired to CSV files in a temp dir.
pub struct Fixture {
    pub dir: TempDir,
    pub app: App,
    pub advisor_calls: Arc<AtomicUsize>,
}

impl Fixture {
    pub fn new() -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let advisor = CannedAdvisor {
            answer: "Plenty of lunchtime office workers.".to_string(),
            calls: calls.clone(),
        };
        Self::build(CATALOG_CSV, Box::new(advisor), calls)
    }

    pub fn with_catalog(catalog_csv: &str) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let advisor = CannedAdvisor {
            answer: String::new(),
            calls: calls.clone(),
        };
        Self::build(catalog_csv, Box::new(advisor), calls)
    }

    pub fn failing() -> Self {
        Self::build(CATALOG_CSV, Box::new(FailingAdvisor), Arc::new(AtomicUsize::new(0)))
    }

    /// Same as `new`, with the session store capped at `max_sessions`.
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        let fx = Self::new();
        let config = AppConfig {
            max_sessions,
            ..fx.app.config.clone()
        };
        let advisor = CannedAdvisor {
            answer: String::new(),
            calls: fx.advisor_calls.clone(),
        };
        Self {
            app: App::new(config, Box::new(advisor)),
            ..fx
        }
    }

    fn build(catalog_csv: &str, advisor: Box<dyn NarrativeAdvisor>, calls: Arc<AtomicUsize>) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("catalog.csv"), catalog_csv).expect("write catalog");
        std::fs::write(dir.path().join("traffic.csv"), TRAFFIC_CSV).expect("write traffic");

        let config = AppConfig {
            catalog_path: dir.path().join("catalog.csv"),
            traffic_path: dir.path().join("traffic.csv"),
            hourly_path: None,
            ..AppConfig::default()
        };

        Self {
            app: App::new(config, advisor),
            dir,
            advisor_calls: calls,
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.path().join("catalog.csv")
    }

    pub fn get(&self, path: &str, cookie: Option<&str>) -> ResultResp {
        handle(request(Method::GET, path, "", cookie), &self.app)
    }

    pub fn post(&self, path: &str, form: &str, cookie: Option<&str>) -> ResultResp {
        handle(request(Method::POST, path, form, cookie), &self.app)
    }

    /// Open a session and return its cookie pair.
    pub fn start_session(&self) -> String {
        let resp = self.get("/", None).unwrap();
        session_cookie(&resp).expect("new session sets a cookie")
    }
}

pub fn request(method: Method, path: &str, body: &str, cookie: Option<&str>) -> Request {
    let mut req = Request::new(Body::from(body.to_string()));
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();
    if let Some(cookie) = cookie {
        req.headers_mut().insert("Cookie", cookie.parse().unwrap());
    }
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// `name=value` from the Set-Cookie header, ready to send back.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// `unwrap_err` without needing `Response: Debug`.
pub fn expect_err(result: ResultResp) -> crate::errors::ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(e) => e,
    }
}
