use crate::models::{SegmentGlobal, SegmentLocal, SimilarListing};
use crate::view::format::{self, PLACEHOLDER, UNDEFINED};
use std::fmt;

/// Columns of the similar-listings table
pub const SIMILAR_COLUMNS: usize = 8;

/// Single row shown when there is nothing to list
pub const NO_SIMILARS: &str = "No se encontraron propiedades similares para estos datos.";

pub const GLOBAL_TITLE: &str = "Segmento global (K-Means, mercado completo)";
pub const LOCAL_TITLE: &str = "Segmento por comuna (ranking de comunas)";

/// Labelled value inside the segment panel
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: &'static str,
    pub value: String,
}

impl Line {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<Line>,
}

/// Contents of the segment region
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentPanel {
    /// Neither segment is known: one flat block, no global/local split
    Undefined(Vec<Line>),
    Defined { global: Section, local: Section },
}

fn text_or(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text.clone(),
        _ => fallback.to_string(),
    }
}

fn int_or_placeholder(value: Option<i64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Zero averages are indistinguishable from missing ones and show `-`
fn average(value: Option<f64>, unit: &str) -> String {
    format::nonzero(value).map_or_else(
        || PLACEHOLDER.to_string(),
        |v| format!("{}{}", format::decimal(v, 1), unit),
    )
}

impl SegmentPanel {
    pub fn undefined() -> Self {
        Self::Undefined(vec![
            Line::new("Nombre", UNDEFINED),
            Line::new("Código segmento", PLACEHOLDER),
            Line::new("N° propiedades en el segmento", PLACEHOLDER),
            Line::new("Precio promedio segmento", PLACEHOLDER),
            Line::new("Superficie promedio", PLACEHOLDER),
            Line::new("Dormitorios promedio", PLACEHOLDER),
        ])
    }

    pub fn build(global: Option<&SegmentGlobal>, local: Option<&SegmentLocal>) -> Self {
        if global.is_none() && local.is_none() {
            return Self::undefined();
        }

        let g = global.cloned().unwrap_or_default();
        let l = local.cloned().unwrap_or_default();

        let global = Section {
            title: GLOBAL_TITLE,
            lines: vec![
                Line::new("Nombre", text_or(g.nombre_segmento.as_ref(), UNDEFINED)),
                Line::new("Código cluster K-Means", int_or_placeholder(g.cluster)),
                Line::new(
                    "N° propiedades en el segmento",
                    int_or_placeholder(g.n_propiedades),
                ),
                Line::new("Precio promedio segmento", format::uf(g.promedio_uf)),
                Line::new("Superficie promedio", average(g.promedio_sup_total, " m²")),
                Line::new("Dormitorios promedio", average(g.promedio_dormitorios, "")),
            ],
        };

        let local = Section {
            title: LOCAL_TITLE,
            lines: vec![
                Line::new("Comuna", text_or(l.comuna.as_ref(), PLACEHOLDER)),
                Line::new("Código segmento comuna", int_or_placeholder(l.segmento_codigo)),
                Line::new(
                    "Nombre segmento comuna",
                    text_or(l.segmento_nombre.as_ref(), UNDEFINED),
                ),
                Line::new(
                    "N° propiedades en la comuna",
                    int_or_placeholder(l.n_propiedades_comuna),
                ),
                Line::new("Precio promedio comuna", format::uf(l.precio_promedio_comuna)),
                Line::new(
                    "Superficie promedio comuna",
                    average(l.sup_promedio_comuna, " m²"),
                ),
                Line::new(
                    "Dormitorios promedio comuna",
                    average(l.dormitorios_promedio_comuna, ""),
                ),
            ],
        };

        Self::Defined { global, local }
    }
}

/// Last cell of a listing row
#[derive(Debug, Clone, PartialEq)]
pub enum LinkCell {
    /// Opens the portal page externally, without an opener reference
    Link { href: String, label: &'static str },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarRow {
    /// id, comuna, total area, bedrooms, bathrooms, parking, price
    pub cells: Vec<String>,
    pub link: LinkCell,
}

impl SimilarRow {
    fn from_listing(listing: &SimilarListing) -> Self {
        let raw = |value: Option<f64>| value.map_or_else(|| PLACEHOLDER.to_string(), format::raw);

        let cells = vec![
            int_or_placeholder(listing.id_propiedad),
            listing
                .comuna
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            raw(listing.sup_total),
            raw(listing.dormitorios),
            raw(listing.banos),
            raw(listing.estacionamientos),
            format::nonzero(listing.precio_en_uf)
                .map_or_else(|| PLACEHOLDER.to_string(), |v| format::decimal(v, 2)),
        ];

        let link = match listing.url_portal.as_deref() {
            Some(href) if !href.is_empty() => LinkCell::Link {
                href: href.to_string(),
                label: "Ver ficha",
            },
            _ => LinkCell::Placeholder,
        };

        Self { cells, link }
    }
}

/// Contents of the similar-listings table body
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarTable {
    Empty {
        colspan: usize,
        message: &'static str,
    },
    Rows(Vec<SimilarRow>),
}

impl SimilarTable {
    pub fn empty() -> Self {
        Self::Empty {
            colspan: SIMILAR_COLUMNS,
            message: NO_SIMILARS,
        }
    }

    /// One row per listing, in the order received
    pub fn build(listings: Option<&[SimilarListing]>) -> Self {
        match listings {
            Some(listings) if !listings.is_empty() => {
                Self::Rows(listings.iter().map(SimilarRow::from_listing).collect())
            }
            _ => Self::empty(),
        }
    }
}

/// Liveness indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    /// Probe not answered yet
    Pending,
    Ready,
    Unreachable,
}

impl ApiStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApiStatus::Pending => "Comprobando API...",
            ApiStatus::Ready => "Listo ✅",
            ApiStatus::Unreachable => "Sin conexión a API",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl fmt::Display for SegmentPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentPanel::Undefined(lines) => {
                for line in lines {
                    writeln!(f, "   {}", line)?;
                }
            }
            SegmentPanel::Defined { global, local } => {
                for section in [global, local] {
                    writeln!(f, "   {}", section.title)?;
                    for line in &section.lines {
                        writeln!(f, "     {}", line)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for SimilarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarTable::Empty { message, .. } => writeln!(f, "   {}", message),
            SimilarTable::Rows(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    let link = match &row.link {
                        LinkCell::Link { href, .. } => href.as_str(),
                        LinkCell::Placeholder => PLACEHOLDER,
                    };
                    writeln!(f, "   {}. {} | {}", i + 1, row.cells.join(" | "), link)?;
                }
                Ok(())
            }
        }
    }
}
