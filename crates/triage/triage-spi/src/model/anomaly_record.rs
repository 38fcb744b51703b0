//! Anomaly record types.

use serde::{Deserialize, Serialize};

/// One detected anomaly from a pipeline inspection run.
///
/// Field names on the wire are camelCase, matching the analysis service
/// JSON. The `viewed` flag travels as `"Y"`/`"N"` (booleans are accepted on
/// input for tooling convenience).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyRecord {
    /// Unique identifier, stable across sessions.
    pub anomaly_number: u64,
    /// Position along the pipeline.
    pub joint_number: u32,
    /// Linear distance marker. Display-only, opaque to the engine.
    pub start_distance: f64,
    /// Categorical label, e.g. "Metal Loss". Display and sort only.
    pub anomaly_type: String,
    /// Detection confidence percentage, 0-100.
    pub confidence: f64,
    /// Severity score, unbounded non-negative.
    pub severity: f64,
    /// `0` means "newly observed, not previously recorded".
    pub persistence: f64,
    /// Growth rate. Display and sort only.
    pub growth_rate: f64,
    /// Triage flag: a human has reviewed this record.
    #[serde(with = "viewed_flag")]
    pub viewed: bool,
}

/// Serde codec for the two-valued viewed flag: `"Y"`/`"N"` on the wire,
/// booleans accepted when deserializing.
pub mod viewed_flag {
    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S>(viewed: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *viewed { "Y" } else { "N" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ViewedVisitor;

        impl<'de> Visitor<'de> for ViewedVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("\"Y\", \"N\", or a boolean")
            }

            fn visit_bool<E>(self, value: bool) -> Result<bool, E> {
                Ok(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<bool, E>
            where
                E: de::Error,
            {
                match value {
                    "Y" => Ok(true),
                    "N" => Ok(false),
                    other => Err(de::Error::invalid_value(Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(ViewedVisitor)
    }
}
