use crate::view::format::PLACEHOLDER;
use crate::view::panels::{ApiStatus, SegmentPanel, SimilarTable};
use std::fmt;

/// Output surface holding the four display regions.
///
/// Each call replaces the whole region; nothing is merged with what was
/// shown before.
pub trait Surface {
    fn show_price(&mut self, text: String);
    fn show_segments(&mut self, panel: SegmentPanel);
    fn show_similars(&mut self, table: SimilarTable);
    fn show_api_status(&mut self, status: ApiStatus);
}

/// In-memory page: the current content of every region
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub price: String,
    pub segments: SegmentPanel,
    pub similars: SimilarTable,
    pub api_status: ApiStatus,
}

impl Page {
    /// True when price, segments and listings all show their placeholders
    pub fn is_blank(&self) -> bool {
        self.price == PLACEHOLDER
            && self.segments == SegmentPanel::undefined()
            && self.similars == SimilarTable::empty()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            price: PLACEHOLDER.to_string(),
            segments: SegmentPanel::undefined(),
            similars: SimilarTable::empty(),
            api_status: ApiStatus::Pending,
        }
    }
}

impl Surface for Page {
    fn show_price(&mut self, text: String) {
        self.price = text;
    }

    fn show_segments(&mut self, panel: SegmentPanel) {
        self.segments = panel;
    }

    fn show_similars(&mut self, table: SimilarTable) {
        self.similars = table;
    }

    fn show_api_status(&mut self, status: ApiStatus) {
        self.api_status = status;
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "API: {}", self.api_status.label())?;
        writeln!(f, "Precio estimado: {}", self.price)?;
        writeln!(f, "Segmento:")?;
        write!(f, "{}", self.segments)?;
        writeln!(f, "Propiedades similares:")?;
        write!(f, "{}", self.similars)
    }
}
