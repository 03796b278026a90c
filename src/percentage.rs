/*
 * Copyright 2025 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::{fmt, str::FromStr};

/// A percentage value that can be written with or without a trailing `%`,
/// such as `50` or `50%`. The original textual form is remembered so the
/// value re-renders exactly as it was written; the suffix never affects the
/// numeric value. No range validation is performed, negative values and
/// values over 100 are accepted.
///
/// In a document the value is always encoded as a string, never as a bare
/// number:
///
/// ```yaml
/// threshold: 50%
/// weight: "30"
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Percentage {
    number: i64,
    has_suffix: bool,
}

impl Percentage {
    /// Creates a percentage that renders without the `%` suffix.
    pub fn new(number: i64) -> Self {
        Self {
            number,
            has_suffix: false,
        }
    }

    /// Creates a percentage that renders with the `%` suffix.
    pub fn with_suffix(number: i64) -> Self {
        Self {
            number,
            has_suffix: true,
        }
    }

    /// Returns the numeric value, ignoring whether the textual form carried
    /// a `%` suffix.
    pub fn value(&self) -> i64 {
        self.number
    }

    /// Whether the textual form carried a `%` suffix.
    pub fn has_suffix(&self) -> bool {
        self.has_suffix
    }

    /// Whether this is the zero value (`0` with no suffix). Intended for
    /// `#[serde(default, skip_serializing_if = "Percentage::is_zero")]` on
    /// optional fields.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl From<i64> for Percentage {
    fn from(number: i64) -> Self {
        Self::new(number)
    }
}

impl From<i32> for Percentage {
    fn from(number: i32) -> Self {
        Self::new(number.into())
    }
}

impl FromStr for Percentage {
    type Err = PercentageError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (raw, has_suffix) = match input.strip_suffix('%') {
            Some(raw) => (raw, true),
            None => (input, false),
        };

        let number = raw.parse().map_err(|source| PercentageError {
            raw: input.to_owned(),
            source,
        })?;

        Ok(Self { number, has_suffix })
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_suffix {
            write!(f, "{}%", self.number)
        } else {
            write!(f, "{}", self.number)
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid percentage '{raw}'")]
pub struct PercentageError {
    raw: String,
    #[source]
    source: std::num::ParseIntError,
}

impl PercentageError {
    /// The offending text as it appeared in the document.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl<'de> serde::Deserialize<'de> for Percentage {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Accept borrowed or owned strings.
        let string = <std::borrow::Cow<'de, str>>::deserialize(de)?;
        string.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl schemars::JsonSchema for Percentage {
    fn schema_name() -> String {
        "Percentage".into()
    }

    fn json_schema(_gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        schemars::schema::SchemaObject {
            instance_type: Some(schemars::schema::InstanceType::String.into()),
            string: Some(Box::new(schemars::schema::StringValidation {
                pattern: Some(r"^-?[0-9]+%?$".into()),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}
