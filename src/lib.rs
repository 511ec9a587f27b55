//! Property price quoting front end.
//!
//! Collects a property description from a form, queries the prediction
//! service's `/predict`, `/segmento` and `/similar` endpoints concurrently and
//! renders the estimate, the market segment and comparable listings.

pub mod api;
pub mod controller;
pub mod form;
pub mod models;
pub mod orchestrator;
pub mod view;

pub use api::{ClientConfig, HttpApiClient, PredictionApi};
pub use controller::{Controller, PageEvent};
pub use form::{collect, FormSource, FormValues};
pub use models::PropertyQuery;
pub use orchestrator::{Gathered, Orchestrator};
pub use view::{Page, Renderer, Surface};
