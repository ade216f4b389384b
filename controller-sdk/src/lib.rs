//! SDK for interacting with the Drycc controller API.
//!
//! This crate works by creating a [`Client`], which holds session
//! information such as the controller URL and user token. The client is
//! then passed to resource modules ([`apps`], [`ps`], [`volumes`],
//! [`config`], [`limits`]), which use it to make requests.
//!
//! # Basic Example
//!
//! Create a client and list the apps the user has access to:
//!
//! ```no_run
//! use controller_sdk::{Client, apps};
//!
//! # async fn example() -> Result<(), controller_sdk::Error> {
//! //                      Verify SSL, Controller URL, API Token
//! let client = Client::new(true, "drycc.test.io", "abc123")?;
//! let (all_apps, count) = apps::list(&client, 100).await?;
//! println!("{} of {count} apps", all_apps.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Version skew
//!
//! Every response announces the API version the controller implements. A
//! major-version difference fails the call with [`Error::ApiMismatch`]; a
//! minor-version difference is backward compatible and only surfaces as
//! [`Compatibility::MinorSkew`] response metadata (and through
//! [`Client::observed_versions`]).
//!
//! # Streaming
//!
//! Log and exec streams are long-lived websocket channels outside the
//! request/response model. The SDK hands out the authenticated endpoint
//! material ([`ps::logs_request`], [`ps::exec_request`]); dialing is the
//! caller's business.

pub mod api;
pub mod apps;
mod client;
pub mod config;
mod error;
pub mod limits;
pub mod ps;
mod request;
mod response;
mod version;
pub mod volumes;

pub use client::{Client, ObservedVersions, StreamRequest};
pub use error::Error;
pub use response::ApiResponse;
pub use version::{API_VERSION, Compatibility};

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
