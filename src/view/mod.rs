//! View rendering: maps results (or their absence) onto the display regions.

pub mod format;
pub mod panels;
pub mod surface;

pub use panels::{ApiStatus, LinkCell, SegmentPanel, SimilarRow, SimilarTable};
pub use surface::{Page, Surface};

use crate::models::{SegmentGlobal, SegmentLocal, SimilarListing};

/// Sole writer of the display regions.
///
/// Every setter is total and idempotent: any input, including `None`,
/// leaves its region in a complete, well-formed state.
pub struct Renderer<S: Surface> {
    surface: S,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Estimated price in UF, or `-` when absent or NaN
    pub fn set_price(&mut self, value: Option<f64>) {
        self.surface.show_price(format::uf(value));
    }

    pub fn set_segments(&mut self, global: Option<&SegmentGlobal>, local: Option<&SegmentLocal>) {
        self.surface.show_segments(SegmentPanel::build(global, local));
    }

    pub fn set_similars(&mut self, listings: Option<&[SimilarListing]>) {
        self.surface.show_similars(SimilarTable::build(listings));
    }

    pub fn set_api_status(&mut self, ok: bool) {
        let status = if ok {
            ApiStatus::Ready
        } else {
            ApiStatus::Unreachable
        };
        self.surface.show_api_status(status);
    }

    /// Put price, segments and listings back to their placeholders
    pub fn reset(&mut self) {
        self.set_price(None);
        self.set_segments(None, None);
        self.set_similars(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> Renderer<Page> {
        Renderer::new(Page::default())
    }

    #[test]
    fn price_formats_or_falls_back() {
        let mut view = renderer();

        view.set_price(Some(1234.5));
        assert_eq!(view.surface().price, "1.234,50 UF");

        view.set_price(None);
        assert_eq!(view.surface().price, "-");

        view.set_price(Some(f64::NAN));
        assert_eq!(view.surface().price, "-");
    }

    #[test]
    fn setters_are_idempotent() {
        let mut view = renderer();
        let global = SegmentGlobal {
            cluster: Some(1),
            ..Default::default()
        };

        view.set_segments(Some(&global), None);
        let once = view.surface().clone();
        view.set_segments(Some(&global), None);
        assert_eq!(view.surface(), &once);
    }

    #[test]
    fn reset_blanks_results_but_keeps_status() {
        let mut view = renderer();
        view.set_api_status(true);
        view.set_price(Some(4000.0));
        view.set_similars(Some(&[SimilarListing::default()][..]));
        assert!(!view.surface().is_blank());

        view.reset();

        let page = view.into_surface();
        assert!(page.is_blank());
        assert_eq!(page.api_status, ApiStatus::Ready);
    }

    #[test]
    fn api_status_toggles() {
        let mut view = renderer();
        assert_eq!(view.surface().api_status, ApiStatus::Pending);

        view.set_api_status(false);
        assert_eq!(view.surface().api_status, ApiStatus::Unreachable);

        view.set_api_status(true);
        assert_eq!(view.surface().api_status, ApiStatus::Ready);
    }
}
