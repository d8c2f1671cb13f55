// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::check::range::ParseError;
use crate::device::{Capability, Unit};

/// Errors that abort an evaluation pass.
///
/// A missing reading is never an error: it is recorded as an entry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CheckError {
    #[error("{metric} alarm level error: {source}")]
    Threshold {
        metric: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("unexpected unit '{unit}' for reading '{label}'")]
    UnexpectedUnit { label: &'static str, unit: Unit },

    #[error("{0} check is not supported on this device type")]
    Unsupported(Capability),

    #[error("unknown check type - {0}")]
    UnknownCheck(String),
}

impl CheckError {
    pub(crate) fn threshold(metric: &'static str) -> impl FnOnce(ParseError) -> CheckError {
        move |source| CheckError::Threshold { metric, source }
    }
}
