//! HTTP services exposing the site's data as JSON.
//!
//! The single `ApiService` implements the `HttpService` trait from
//! sarcdoc_base and routes all requests internally, so it works unchanged
//! against both `RealPal` (production) and `MockPal` (tests).

mod service;

pub use service::ApiService;
