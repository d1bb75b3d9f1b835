//! # API Client
//!
//! Blocking JSON-over-HTTP access to the pawject server's `/api/*`
//! endpoints.
//!
//! | Method | Timeout | Used for |
//! |--------|---------|----------|
//! | GET | 10s | listings and status queries |
//! | POST | 30s | creating tasks, user todos, agent registrations |
//! | PATCH | 10s | status changes, resolutions, heartbeats |
//!
//! Every failure is final: there is no retry. Callers turn an [`ApiError`]
//! into a diagnostic on stderr and exit code 1.

mod client;
mod error;

pub use client::{ApiClient, Method, DEFAULT_API_URL};
pub use error::ApiError;
