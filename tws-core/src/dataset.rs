//! The district-keyed time-series dataset served by `/api/tws`.

use crate::district::normalize_district;
use crate::error::{LoadError, Result};
use crate::series::WaterSeries;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

const RESOURCE: &str = "TWS dataset";

/// One element of the list-shaped `/api/tws` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictRecord {
    pub district: String,
    pub data: WaterSeries,
}

/// The object-shaped payload as `(district, series)` pairs in payload order,
/// repeated keys included.
struct DistrictEntries(Vec<(String, WaterSeries)>);

impl<'de> Deserialize<'de> for DistrictEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DistrictEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from district name to series")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<DistrictEntries, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, WaterSeries>()? {
                    entries.push(entry);
                }
                Ok(DistrictEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Time series for every district, keyed by normalized district name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TwsDataset {
    series: BTreeMap<String, WaterSeries>,
}

impl TwsDataset {
    /// Parse a `/api/tws` body.
    ///
    /// The expected payload is an object keyed by lowercase district name. A
    /// list of `{"district": .., "data": {..}}` records is accepted as well and
    /// converted to the same mapping. Both shapes are read straight from the
    /// text so districts and years keep their payload order.
    pub fn from_json(body: &str) -> Result<Self> {
        let parse = |source| LoadError::Parse {
            resource: RESOURCE,
            source,
        };
        match body.trim_start().chars().next() {
            Some('{') => {
                let entries: DistrictEntries = serde_json::from_str(body).map_err(parse)?;
                Ok(Self::from_entries(entries.0))
            }
            Some('[') => {
                let records: Vec<DistrictRecord> = serde_json::from_str(body).map_err(parse)?;
                log::info!("Converting {} TWS records to a district mapping", records.len());
                Ok(Self::from_entries(
                    records.into_iter().map(|r| (r.district, r.data)),
                ))
            }
            _ => {
                let other: Value = serde_json::from_str(body).map_err(parse)?;
                Err(LoadError::InvalidShape {
                    resource: RESOURCE,
                    reason: format!("expected an object or a list, found {}", json_kind(&other)),
                })
            }
        }
    }

    /// Build a dataset from `(district name, series)` pairs, normalizing every
    /// name. When two names normalize to the same key the first one wins.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, WaterSeries)>,
    {
        let mut series = BTreeMap::new();
        for (name, data) in entries {
            let key = normalize_district(name.as_ref());
            if series.contains_key(&key) {
                log::warn!(
                    "Duplicate TWS entry for district {:?} (key {:?}), keeping the first",
                    name.as_ref(),
                    key
                );
                continue;
            }
            series.insert(key, data);
        }
        Self { series }
    }

    /// Series for a raw district display name, in any casing or padding.
    pub fn lookup(&self, district: &str) -> Option<&WaterSeries> {
        self.series.get(&normalize_district(district))
    }

    pub fn get(&self, key: &str) -> Option<&WaterSeries> {
        self.series.get(key)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Normalized district keys in sorted order.
    pub fn districts(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
