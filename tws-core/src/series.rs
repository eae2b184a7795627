//! Per-district time series of terrestrial water storage.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Year-label to value mapping for a single district, in billion cubic meters.
///
/// Entries keep the order they had in the JSON object they were parsed from,
/// which is the order the chart plots them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaterSeries {
    entries: Vec<(String, f64)>,
}

impl WaterSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. An existing label is overwritten in place.
    pub fn insert(&mut self, year: impl Into<String>, value: f64) {
        let year = year.into();
        match self.entries.iter_mut().find(|(label, _)| *label == year) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((year, value)),
        }
    }

    pub fn get(&self, year: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(label, _)| label == year)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(year, value)` pairs in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(year, value)| (year.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WaterSeries {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut series = WaterSeries::new();
        for (year, value) in iter {
            series.insert(year, value);
        }
        series
    }
}

impl Serialize for WaterSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (year, value) in &self.entries {
            map.serialize_entry(year, value)?;
        }
        map.end()
    }
}

struct WaterSeriesVisitor;

impl<'de> Visitor<'de> for WaterSeriesVisitor {
    type Value = WaterSeries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from year label to numeric value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<WaterSeries, A::Error> {
        let mut series = WaterSeries {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((year, value)) = access.next_entry::<YearLabel, f64>()? {
            series.insert(year.0, value);
        }
        Ok(series)
    }
}

impl<'de> Deserialize<'de> for WaterSeries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(WaterSeriesVisitor)
    }
}

/// A year key, accepted either as a string or as an integer.
struct YearLabel(String);

impl<'de> Deserialize<'de> for YearLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct LabelVisitor;

        impl<'de> Visitor<'de> for LabelVisitor {
            type Value = YearLabel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a year label")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<YearLabel, E> {
                Ok(YearLabel(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<YearLabel, E> {
                Ok(YearLabel(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<YearLabel, E> {
                Ok(YearLabel(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<YearLabel, E> {
                Ok(YearLabel(v.to_string()))
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_entry_order() {
        let series: WaterSeries =
            serde_json::from_str(r#"{"2012": 0.4, "2010": 1.2, "2011": -1.5}"#).unwrap();
        let years: Vec<&str> = series.iter().map(|(year, _)| year).collect();
        assert_eq!(years, vec!["2012", "2010", "2011"]);
        assert_eq!(series.get("2011"), Some(-1.5));
    }

    #[test]
    fn test_parse_integer_values() {
        let series: WaterSeries = serde_json::from_str(r#"{"2003": 2, "2004": 0}"#).unwrap();
        assert_eq!(series.get("2003"), Some(2.0));
        assert_eq!(series.get("2004"), Some(0.0));
    }

    #[test]
    fn test_parse_rejects_non_numeric_values() {
        let err = serde_json::from_str::<WaterSeries>(r#"{"2010": "high"}"#).unwrap_err();
        assert!(err.is_data());
        assert!(serde_json::from_str::<WaterSeries>("[1.0, 2.0]").is_err());
    }

    #[test]
    fn test_empty_series() {
        let series: WaterSeries = serde_json::from_str("{}").unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn test_insert_overwrites_existing_label() {
        let mut series = WaterSeries::new();
        series.insert("2010", 1.0);
        series.insert("2011", 2.0);
        series.insert("2010", 3.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.iter().next(), Some(("2010", 3.0)));
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let series: WaterSeries = [("2015", 0.25), ("2014", 0.5)].into_iter().collect();
        assert_eq!(serde_json::to_string(&series).unwrap(), r#"{"2015":0.25,"2014":0.5}"#);
    }
}
