//! JSON (serde) representation
//!
//! A [`Version`] serializes as `{"$raw": "v24.1.0"}` rather than a bare
//! string, so consumers cannot mistake it for an arbitrary string field.
//! A [`NullVersion`] serializes as `{"Valid": false}` or
//! `{"Valid": true, "Version": {"$raw": "v24.1.0"}}`; the explicit
//! discriminant keeps an absent value distinct from a version whose text is
//! empty, which would not survive [`Version::parse`].
//!
//! Copyright (c) 2025 The Cockroach Authors
//! Licensed under the Apache-2.0 license

use crate::null::NullVersion;
use crate::version::Version;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const RAW_KEY: &str = "$raw";
const VALID_KEY: &str = "Valid";
const VERSION_KEY: &str = "Version";

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Version", 1)?;
        state.serialize_field(RAW_KEY, &self.raw)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVersion {
    #[serde(rename = "$raw")]
    raw: String,
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RawVersion { raw } = RawVersion::deserialize(deserializer)?;
        Version::parse(&raw).map_err(de::Error::custom)
    }
}

impl Serialize for NullVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.valid { 2 } else { 1 };
        let mut state = serializer.serialize_struct("NullVersion", len)?;
        state.serialize_field(VALID_KEY, &self.valid)?;
        if self.valid {
            state.serialize_field(VERSION_KEY, &self.version)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for NullVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = Value::deserialize(deserializer)?;

        match payload.get(VALID_KEY) {
            // any Version key is ignored for absent values
            Some(Value::Bool(false)) => return Ok(NullVersion::null()),
            Some(Value::Bool(true)) => {
                // same strictness as Version: "$raw" and nothing else
                let raw = payload
                    .get(VERSION_KEY)
                    .and_then(Value::as_object)
                    .filter(|fields| fields.len() == 1)
                    .and_then(|fields| fields.get(RAW_KEY))
                    .and_then(Value::as_str);
                if let Some(raw) = raw {
                    let version = Version::parse(raw).map_err(de::Error::custom)?;
                    return Ok(NullVersion {
                        valid: true,
                        version,
                    });
                }
            }
            _ => {}
        }

        Err(de::Error::custom(format!(
            "cannot parse '{}' as NullVersion",
            payload
        )))
    }
}
