//! Input collection: reads the property form and builds a [`PropertyQuery`].

pub mod parse;

use crate::models::PropertyQuery;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Control identifiers of the property form
pub mod fields {
    pub const SUP_TOTAL: &str = "sup_total";
    pub const SUP_CONSTRUIDA: &str = "sup_construida";
    pub const DORMITORIOS: &str = "dormitorios";
    pub const BANOS: &str = "banos";
    pub const ESTACIONAMIENTOS: &str = "estacionamientos";
    pub const ANTIGUEDAD: &str = "antiguedad";
    pub const COMUNA: &str = "comuna";
    pub const BODEGAS: &str = "bodegas";
    pub const PISOS: &str = "pisos";
    pub const TERRAZA: &str = "terraza";
    pub const PISCINA: &str = "piscina";
    pub const AIRE_ACONDICIONADO: &str = "aire_acondicionado";
    pub const CLOSETS_EMPOTRADOS: &str = "closets_empotrados";
}

/// Read access to the current state of form controls
pub trait FormSource {
    /// Current text of an input control, `None` when the control is missing
    fn text(&self, field: &str) -> Option<String>;

    /// Checked state of a checkbox; missing controls read as unchecked
    fn checked(&self, field: &str) -> bool;
}

/// A single control value as submitted by the host
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Form snapshot keyed by control id, typically decoded from JSON
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object such as `{"sup_total": "85", "terraza": true}`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to decode form values")
    }

    pub fn with_text(mut self, field: &str, text: impl Into<String>) -> Self {
        self.values
            .insert(field.to_string(), FieldValue::Text(text.into()));
        self
    }

    pub fn with_checked(mut self, field: &str, checked: bool) -> Self {
        self.values
            .insert(field.to_string(), FieldValue::Flag(checked));
        self
    }
}

impl FormSource for FormValues {
    fn text(&self, field: &str) -> Option<String> {
        match self.values.get(field)? {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Number(number) => Some(number.to_string()),
            FieldValue::Flag(_) => None,
        }
    }

    fn checked(&self, field: &str) -> bool {
        matches!(self.values.get(field), Some(FieldValue::Flag(true)))
    }
}

/// Trim and lower-case a commune name, the form the service matches on
pub fn canonical_comuna(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Build a query from the form. Never fails: unreadable input becomes 0,
/// an empty commune or `false`.
pub fn collect<F: FormSource + ?Sized>(form: &F) -> PropertyQuery {
    let text = |field: &str| form.text(field).unwrap_or_default();

    PropertyQuery {
        sup_total: parse::area(&text(fields::SUP_TOTAL)),
        sup_construida: parse::area(&text(fields::SUP_CONSTRUIDA)),
        dormitorios: parse::count(&text(fields::DORMITORIOS)),
        banos: parse::count(&text(fields::BANOS)),
        estacionamientos: parse::count(&text(fields::ESTACIONAMIENTOS)),
        antiguedad: parse::count(&text(fields::ANTIGUEDAD)),
        comuna: canonical_comuna(&text(fields::COMUNA)),
        bodegas: parse::count(&text(fields::BODEGAS)),
        pisos: form
            .text(fields::PISOS)
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse::count(&value)),
        terraza: form.checked(fields::TERRAZA),
        piscina: form.checked(fields::PISCINA),
        aire_acondicionado: form.checked(fields::AIRE_ACONDICIONADO),
        closets_empotrados: form.checked(fields::CLOSETS_EMPOTRADOS),
    }
}
