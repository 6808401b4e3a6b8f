// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - auth, session and API access.

pub mod auth;
pub mod endpoints;
pub mod fortnite;
pub mod session;
pub mod transport;

pub use auth::{AuthEngine, AuthLeg};
pub use endpoints::Endpoints;
pub use fortnite::FortniteClient;
pub use session::{Credentials, SessionState, SessionTokens};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};
