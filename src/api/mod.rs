pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpApiClient;
pub use traits::PredictionApi;
pub use types::ClientConfig;
