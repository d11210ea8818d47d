//! Wire format for money amounts
//!
//! Amounts are held as `f64` but written the way clients sent them: whole
//! values as JSON integers (`5000`), anything else as a float (`12.5`).

use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serializer};

/// Largest magnitude an `f64` holds without losing integer precision (2^53)
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Same rule applied to every value of a name → amount map
pub fn serialize_map<S: Serializer>(
    values: &IndexMap<String, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    struct Amount(f64);

    impl serde::Serialize for Amount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize(&self.0, serializer)
        }
    }

    let mut map = serializer.serialize_map(Some(values.len()))?;
    for (name, value) in values {
        map.serialize_entry(name, &Amount(*value))?;
    }
    map.end()
}
