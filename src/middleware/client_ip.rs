//! Client IP resolution.
//!
//! The gateway commonly sits behind a reverse proxy, so proxy headers take
//! precedence over the socket peer address. The resolved address is stored
//! as a request extension and forwarded to the backend on login so sessions
//! record where they were created.

use std::net::{IpAddr, SocketAddr};

use axum::extract::ConnectInfo;
use http::Request;

/// Proxy headers consulted in order. `X-Forwarded-For` may carry a chain;
/// the first entry is the originating client.
const IP_HEADERS: &[&str] = &["x-forwarded-for", "x-real-ip"];

/// Client address resolved for the current request.
#[derive(Debug, Clone, Copy)]
pub struct ClientIp(pub Option<IpAddr>);

impl ClientIp {
    #[must_use]
    pub fn from_request<T>(req: &Request<T>) -> Self {
        Self(resolve(req))
    }

    #[inline]
    #[must_use]
    pub const fn ip(&self) -> Option<IpAddr> {
        self.0
    }
}

fn resolve<T>(req: &Request<T>) -> Option<IpAddr> {
    for header in IP_HEADERS {
        let ip = req
            .headers()
            .get(*header)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .and_then(|v| v.parse::<IpAddr>().ok());

        if ip.is_some() {
            return ip;
        }
    }

    // Direct connections: peer address recorded by
    // into_make_service_with_connect_info.
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip())
}
