// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serialized shapes of the machine readable report.

use chrono::DateTime;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::check::Severity;

mod rfc3339_format {
    use chrono::DateTime;
    use chrono::SecondsFormat;

    pub fn serialize<S>(date: &DateTime<chrono_tz::Tz>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = date.to_rfc3339_opts(SecondsFormat::Millis, true);
        serializer.serialize_str(&s)
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Root {
    #[serde(flatten)]
    pub report: Report,

    #[serde(rename = "timestamp")]
    #[serde(with = "rfc3339_format")]
    pub timestamp: DateTime<chrono_tz::Tz>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Report {
    #[serde(rename = "check")]
    pub check: String,
    #[serde(rename = "severity")]
    pub severity: Severity,
    #[serde(rename = "exitCode")]
    pub exit_code: i32,
    #[serde(rename = "summary")]
    pub summary: String,
    #[serde(rename = "entries")]
    pub entries: Vec<Entry>,
    #[serde(rename = "perfData")]
    pub perf_data: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Entry {
    #[serde(rename = "severity")]
    pub severity: Severity,
    #[serde(rename = "text")]
    pub text: String,
    #[serde(rename = "longText")]
    pub long_text: Option<String>,
    #[serde(rename = "perfData")]
    pub perf_data: Option<PerfData>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PerfData {
    #[serde(rename = "label")]
    pub label: String,
    #[serde(rename = "value")]
    pub value: i64,
    #[serde(rename = "unit")]
    pub unit: Option<String>,
    #[serde(rename = "warn")]
    pub warn: Option<String>,
    #[serde(rename = "crit")]
    pub crit: Option<String>,
    #[serde(rename = "min")]
    pub min: Option<String>,
    #[serde(rename = "max")]
    pub max: Option<String>,
}
