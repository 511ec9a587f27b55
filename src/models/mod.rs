use serde::{Deserialize, Serialize};

/// Property description sent to every prediction endpoint.
///
/// Field names are the wire contract of the remote service and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub sup_total: f64,
    pub sup_construida: f64,
    pub dormitorios: u32,
    pub banos: u32,
    pub estacionamientos: u32,
    pub antiguedad: u32,
    /// Commune name, trimmed and lower-cased
    pub comuna: String,
    pub bodegas: u32,
    /// Floor count; the service assumes 1 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pisos: Option<u32>,
    pub terraza: bool,
    pub piscina: bool,
    pub aire_acondicionado: bool,
    pub closets_empotrados: bool,
}

impl Default for PropertyQuery {
    fn default() -> Self {
        Self {
            sup_total: 0.0,
            sup_construida: 0.0,
            dormitorios: 0,
            banos: 0,
            estacionamientos: 0,
            antiguedad: 0,
            comuna: String::new(),
            bodegas: 0,
            pisos: None,
            terraza: false,
            piscina: false,
            aire_acondicionado: false,
            closets_empotrados: false,
        }
    }
}

/// Body of `POST /predict`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceResponse {
    /// Final estimate in UF
    pub precio_estimado_uf: Option<f64>,
    /// Raw model output before the neighbour adjustment
    pub precio_modelo_uf: Option<f64>,
    pub k_usado_para_ajuste: Option<u32>,
}

/// Market-wide cluster assigned by the clustering model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentGlobal {
    pub cluster: Option<i64>,
    pub nombre_segmento: Option<String>,
    pub n_propiedades: Option<i64>,
    pub promedio_uf: Option<f64>,
    pub promedio_sup_total: Option<f64>,
    pub promedio_dormitorios: Option<f64>,
}

/// Commune-scoped segment and its statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentLocal {
    pub comuna: Option<String>,
    pub segmento_codigo: Option<i64>,
    pub segmento_nombre: Option<String>,
    pub n_propiedades_comuna: Option<i64>,
    pub precio_promedio_comuna: Option<f64>,
    pub sup_promedio_comuna: Option<f64>,
    pub dormitorios_promedio_comuna: Option<f64>,
}

/// Body of `POST /segmento`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentResponse {
    pub segmento_global: Option<SegmentGlobal>,
    pub segmento_local: Option<SegmentLocal>,
}

/// Comparable listing returned by the similarity search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarListing {
    pub id_propiedad: Option<i64>,
    pub comuna: Option<String>,
    pub sup_total: Option<f64>,
    pub sup_construida: Option<f64>,
    pub dormitorios: Option<f64>,
    pub banos: Option<f64>,
    pub estacionamientos: Option<f64>,
    pub precio_en_uf: Option<f64>,
    /// Distance to the query in the scaled feature space
    pub distancia: Option<f64>,
    /// Listing page on the external portal; may be empty
    pub url_portal: Option<String>,
}

/// Body of `POST /similar`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarResponse {
    /// Rank-ordered, nearest first
    pub similares: Option<Vec<SimilarListing>>,
    pub k: Option<u32>,
}
