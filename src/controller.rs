//! Page lifecycle: a one-shot liveness probe on load and the submit handler.

use crate::api::PredictionApi;
use crate::form::{self, FormSource, FormValues};
use crate::orchestrator::{Gathered, Orchestrator};
use crate::view::{Renderer, Surface};
use anyhow::Result;
use std::future::Future;
use std::pin::Pin;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

/// Events delivered by the host page
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Page finished loading; starts the liveness probe
    Loaded,
    /// Form submitted with the given control values
    Submitted(FormValues),
}

type Probe<'a> = Pin<Box<dyn Future<Output = Result<bool>> + Send + 'a>>;

/// Owns the orchestrator and the renderer for the lifetime of the page
pub struct Controller<A: PredictionApi, S: Surface> {
    orchestrator: Orchestrator<A>,
    view: Renderer<S>,
    probed: bool,
}

impl<A: PredictionApi, S: Surface> Controller<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            orchestrator: Orchestrator::new(api),
            view: Renderer::new(surface),
            probed: false,
        }
    }

    pub fn surface(&self) -> &S {
        self.view.surface()
    }

    pub fn into_surface(self) -> S {
        self.view.into_surface()
    }

    /// Probe `/health` once and update the indicator. Later calls do nothing.
    pub async fn on_load(&mut self) {
        if self.probed {
            debug!("Liveness probe already ran");
            return;
        }
        self.probed = true;

        let outcome = self.orchestrator.api().health().await;
        apply_probe(&mut self.view, outcome);
    }

    /// Collect the form and run one submission
    pub async fn on_submit<F: FormSource + ?Sized>(&mut self, form: &F) -> Gathered {
        submit(&self.orchestrator, &mut self.view, form).await
    }

    /// Dispatch page events until the sender side closes.
    ///
    /// The liveness probe is polled while the loop waits for the next event,
    /// so a slow `/health` never delays picking up a submission. A submission
    /// already in progress runs to completion before the probe is polled again.
    pub async fn run(&mut self, mut events: UnboundedReceiver<PageEvent>) {
        let orchestrator = &self.orchestrator;
        let view = &mut self.view;
        let mut probe: Option<Probe<'_>> = None;

        loop {
            let probing = probe.is_some();

            tokio::select! {
                outcome = async {
                    match probe.as_mut() {
                        Some(pending) => pending.await,
                        None => std::future::pending().await,
                    }
                }, if probing => {
                    probe = None;
                    apply_probe(view, outcome);
                }
                event = events.recv() => match event {
                    Some(PageEvent::Loaded) => {
                        if self.probed {
                            debug!("Liveness probe already ran");
                        } else {
                            self.probed = true;
                            probe = Some(orchestrator.api().health());
                        }
                    }
                    Some(PageEvent::Submitted(values)) => {
                        submit(orchestrator, view, &values).await;
                    }
                    None => break,
                },
            }
        }

        if let Some(pending) = probe {
            apply_probe(view, pending.await);
        }
        info!("Page closed");
    }
}

async fn submit<A, S, F>(
    orchestrator: &Orchestrator<A>,
    view: &mut Renderer<S>,
    form: &F,
) -> Gathered
where
    A: PredictionApi,
    S: Surface,
    F: FormSource + ?Sized,
{
    let query = form::collect(form);
    info!("Submitting query for comuna {:?}", query.comuna);
    orchestrator.submit(&query, view).await
}

fn apply_probe<S: Surface>(view: &mut Renderer<S>, outcome: Result<bool>) {
    let ok = match outcome {
        Ok(ok) => ok,
        Err(e) => {
            warn!("Liveness probe failed: {:#}", e);
            false
        }
    };
    info!("API reachable: {}", ok);
    view.set_api_status(ok);
}
