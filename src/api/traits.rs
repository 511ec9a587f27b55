use crate::models::{PriceResponse, PropertyQuery, SegmentResponse, SimilarResponse};
use anyhow::Result;
use async_trait::async_trait;

/// Remote prediction service.
///
/// Endpoint calls return `Ok(None)` when the service answered without a result
/// (non-2xx status or a `null` body) and `Err` when the request failed in
/// transport or the body could not be read or decoded.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Liveness probe; `Ok(true)` on a 2xx answer
    async fn health(&self) -> Result<bool>;

    /// Price estimate
    async fn predict(&self, query: &PropertyQuery) -> Result<Option<PriceResponse>>;

    /// Global and commune segments
    async fn segment(&self, query: &PropertyQuery) -> Result<Option<SegmentResponse>>;

    /// Nearest comparable listings
    async fn similar(&self, query: &PropertyQuery) -> Result<Option<SimilarResponse>>;
}
