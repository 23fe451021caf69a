//! Backend base-URL resolution.
//!
//! The catalog is deployed in several ways (local dev, a NodePort cluster,
//! a cloud load balancer), and the browser has to guess which backend to
//! talk to from its own location. The deployment profiles live in an
//! ordered rule table (`EndpointMap`) rather than in code, so a deployment
//! can replace the whole table by publishing a JSON value on
//! `window.PRODUCTS_API_CONFIG` without rebuilding the bundle. A
//! compile-time `PRODUCTS_API_URL` override wins over everything.

use serde::Deserialize;

/// Compile-time override for the API base URL. Wins over every rule.
const ENV_OVERRIDE: Option<&str> = option_env!("PRODUCTS_API_URL");

/// Name of the global the runtime rule table is read from.
const CONFIG_GLOBAL: &str = "PRODUCTS_API_CONFIG";

/// Port guessed when a custom rule table matches nothing.
const FALLBACK_PORT: u16 = 31977;

/// The browser location the resolver matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationContext {
    /// e.g. "http:" or "https:"
    pub protocol: String,
    pub hostname: String,
    /// Empty string when the URL carries no explicit port.
    pub port: String,
}

impl LocationContext {
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Self {
                protocol: "http:".to_string(),
                hostname: "127.0.0.1".to_string(),
                port: String::new(),
            };
        };
        let location = window.location();
        Self {
            protocol: location.protocol().unwrap_or_else(|_| "http:".to_string()),
            hostname: location
                .hostname()
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: location.port().unwrap_or_default(),
        }
    }
}

/// How a rule matches the current hostname.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostMatch {
    /// One of the listed hostnames, exactly.
    AnyOf(Vec<String>),
    /// A dotted-quad IPv4 literal starting with the given prefix.
    Ipv4Prefix(String),
    /// Any dotted-quad IPv4 literal.
    Ipv4,
    /// Every hostname.
    Any,
}

impl HostMatch {
    fn matches(&self, hostname: &str) -> bool {
        match self {
            HostMatch::AnyOf(hosts) => hosts.iter().any(|h| h == hostname),
            HostMatch::Ipv4Prefix(prefix) => {
                is_ipv4_literal(hostname) && hostname.starts_with(prefix.as_str())
            }
            HostMatch::Ipv4 => is_ipv4_literal(hostname),
            HostMatch::Any => true,
        }
    }
}

/// Where requests go once a rule has matched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// A fixed, fully qualified base URL.
    Fixed(String),
    /// Keep the current hostname, talk to the given port, `/api` suffix.
    CurrentHostPort(u16),
    /// Reuse protocol and host of the current location, `/api` suffix.
    CurrentOrigin,
}

impl Target {
    fn base_url(&self, ctx: &LocationContext) -> String {
        match self {
            Target::Fixed(url) => url.clone(),
            Target::CurrentHostPort(port) => {
                format!("http://{}:{}/api", ctx.hostname, port)
            }
            Target::CurrentOrigin => format!("{}//{}/api", ctx.protocol, ctx.hostname),
        }
    }
}

/// One row of the resolution table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointRule {
    pub host: HostMatch,
    /// When set, the location port must match exactly.
    #[serde(default)]
    pub port: Option<String>,
    pub target: Target,
}

impl EndpointRule {
    fn matches(&self, ctx: &LocationContext) -> bool {
        if let Some(port) = &self.port {
            if *port != ctx.port {
                return false;
            }
        }
        self.host.matches(&ctx.hostname)
    }
}

/// Ordered rule table mapping browser locations to backend base URLs.
/// First match wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointMap {
    pub rules: Vec<EndpointRule>,
}

impl EndpointMap {
    /// Resolve the base URL for the given location. Always returns a URL;
    /// a table without a catch-all falls back to a guessed NodePort base.
    pub fn resolve(&self, ctx: &LocationContext) -> String {
        for rule in &self.rules {
            if rule.matches(ctx) {
                return rule.target.base_url(ctx);
            }
        }
        Target::CurrentHostPort(FALLBACK_PORT).base_url(ctx)
    }
}

impl Default for EndpointMap {
    /// The known deployment profiles, most specific first: NodePort
    /// direct access, local frontend against the NodePort backend, plain
    /// local development, the production load balancer, and generic
    /// fallbacks for unknown IPs and domain names.
    fn default() -> Self {
        Self {
            rules: vec![
                EndpointRule {
                    host: HostMatch::Ipv4Prefix("192.168.".to_string()),
                    port: None,
                    target: Target::CurrentHostPort(31977),
                },
                EndpointRule {
                    host: HostMatch::AnyOf(vec![
                        "localhost".to_string(),
                        "127.0.0.1".to_string(),
                    ]),
                    port: Some("30593".to_string()),
                    target: Target::Fixed("http://192.168.39.117:31977/api".to_string()),
                },
                EndpointRule {
                    host: HostMatch::AnyOf(vec![
                        "localhost".to_string(),
                        "127.0.0.1".to_string(),
                    ]),
                    port: None,
                    target: Target::Fixed("http://localhost:5000/api".to_string()),
                },
                EndpointRule {
                    host: HostMatch::AnyOf(vec!["34.172.36.134".to_string()]),
                    port: None,
                    target: Target::Fixed("http://104.155.134.17/api".to_string()),
                },
                EndpointRule {
                    host: HostMatch::Ipv4,
                    port: None,
                    target: Target::Fixed("http://104.155.134.17/api".to_string()),
                },
                EndpointRule {
                    host: HostMatch::Any,
                    port: None,
                    target: Target::CurrentOrigin,
                },
            ],
        }
    }
}

fn is_ipv4_literal(host: &str) -> bool {
    let mut octets = 0;
    for part in host.split('.') {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        octets += 1;
    }
    octets == 4
}

/// Get the base URL for API requests.
///
/// Resolution order: compile-time `PRODUCTS_API_URL` override, then the
/// rule table published on `window.PRODUCTS_API_CONFIG`, then the built-in
/// deployment table. Never fails; worst case is a guessed default.
pub fn api_base() -> String {
    if let Some(url) = ENV_OVERRIDE {
        return url.trim_end_matches('/').to_string();
    }
    let ctx = LocationContext::current();
    window_config().unwrap_or_default().resolve(&ctx)
}

/// Read a replacement rule table from the window global, if the deployment
/// published one. Malformed values are ignored with a warning.
fn window_config() -> Option<EndpointMap> {
    let window = web_sys::window()?;
    let value =
        js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(map) => Some(map),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", CONFIG_GLOBAL, e);
            None
        }
    }
}
