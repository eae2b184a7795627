//! District boundary polygons served by `/api/boundaries` as GeoJSON.

use crate::dataset::json_kind;
use crate::district::UNKNOWN_DISTRICT;
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const RESOURCE: &str = "boundary collection";

/// Feature property holding the district display name.
pub const DISTRICT_PROPERTY: &str = "DISTRICT";

/// A GeoJSON `FeatureCollection` of district polygons.
///
/// Members other than `type` and `features` are carried along untouched so
/// the collection handed to the map is the one the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<BoundaryFeature>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

/// A single district polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    #[serde(rename = "type")]
    pub kind: String,
    /// Kept as raw JSON: a non-object value only costs the feature its name
    #[serde(default)]
    pub properties: Option<Value>,
    pub geometry: Value,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl BoundaryFeature {
    /// The raw `DISTRICT` property, if present and a string.
    pub fn district(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|props| props.as_object())
            .and_then(|props| props.get(DISTRICT_PROPERTY))
            .and_then(Value::as_str)
    }

    /// Label shown on the map and reported on click.
    pub fn display_name(&self) -> &str {
        self.district().unwrap_or(UNKNOWN_DISTRICT)
    }
}

impl BoundaryCollection {
    /// Parse and validate a `/api/boundaries` body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|source| LoadError::Parse {
            resource: RESOURCE,
            source,
        })?;

        let kind = value.get("type").and_then(Value::as_str);
        if kind != Some("FeatureCollection") {
            return Err(LoadError::InvalidShape {
                resource: RESOURCE,
                reason: match kind {
                    Some(kind) => format!("expected a FeatureCollection, found {kind:?}"),
                    None => format!("expected a GeoJSON FeatureCollection, found {}", json_kind(&value)),
                },
            });
        }

        let collection: BoundaryCollection =
            serde_json::from_value(value).map_err(|source| LoadError::Parse {
                resource: RESOURCE,
                source,
            })?;

        let unnamed = collection
            .features
            .iter()
            .filter(|f| f.district().is_none())
            .count();
        if unnamed > 0 {
            log::warn!(
                "{} of {} boundary features have no {} property and will be labeled {:?}",
                unnamed,
                collection.features.len(),
                DISTRICT_PROPERTY,
                UNKNOWN_DISTRICT
            );
        }

        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Display names of every feature, in collection order.
    pub fn district_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(BoundaryFeature::display_name)
    }
}
