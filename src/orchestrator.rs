//! Request orchestration: one query, three concurrent endpoint calls, one render.

use crate::api::PredictionApi;
use crate::models::{PriceResponse, PropertyQuery, SegmentResponse, SimilarResponse};
use crate::view::{Renderer, Surface};
use anyhow::{Context, Result};
use tracing::{debug, error, info};

/// Parsed answers of one submission; `None` marks an absent endpoint result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gathered {
    pub estimate: Option<PriceResponse>,
    pub segments: Option<SegmentResponse>,
    pub similars: Option<SimilarResponse>,
}

pub struct Orchestrator<A: PredictionApi> {
    api: A,
}

impl<A: PredictionApi> Orchestrator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Issue the three requests concurrently and wait for all of them.
    ///
    /// A failing request never cancels the others. Transport failures and
    /// malformed bodies are errors; non-2xx answers come back as `None`.
    pub async fn gather(&self, query: &PropertyQuery) -> Result<Gathered> {
        debug!("Dispatching predict, segmento and similar for {:?}", query.comuna);

        let (estimate, segments, similars) = tokio::join!(
            self.api.predict(query),
            self.api.segment(query),
            self.api.similar(query)
        );

        Ok(Gathered {
            estimate: estimate.context("Price prediction request failed")?,
            segments: segments.context("Segmentation request failed")?,
            similars: similars.context("Similarity request failed")?,
        })
    }

    /// Run one submission against `view`.
    ///
    /// The view is reset before any request leaves, and results are applied
    /// only once all three requests have settled. On failure the error is
    /// logged and the view is left reset.
    pub async fn submit<S: Surface>(&self, query: &PropertyQuery, view: &mut Renderer<S>) -> Gathered {
        view.reset();

        match self.gather(query).await {
            Ok(gathered) => {
                info!(
                    "Results: price={}, segments={}, similars={}",
                    gathered.estimate.is_some(),
                    gathered.segments.is_some(),
                    gathered.similars.is_some()
                );
                render(&gathered, view);
                gathered
            }
            Err(e) => {
                error!("Error querying prediction API: {:#}", e);
                view.reset();
                Gathered::default()
            }
        }
    }
}

/// Apply whatever was obtained; absent results keep their reset state
fn render<S: Surface>(gathered: &Gathered, view: &mut Renderer<S>) {
    if let Some(estimate) = &gathered.estimate {
        view.set_price(estimate.precio_estimado_uf);
    }

    if let Some(segments) = &gathered.segments {
        view.set_segments(
            segments.segmento_global.as_ref(),
            segments.segmento_local.as_ref(),
        );
    }

    if let Some(similars) = &gathered.similars {
        view.set_similars(similars.similares.as_deref());
    }
}
