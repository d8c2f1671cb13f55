// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

pub mod alarm;
pub mod classify;
mod config;
mod emitter;
mod error;
mod perfdata;
mod range;
pub mod registry;
mod report;
mod run;
mod severity;
mod thresholds;
mod writer;

pub use config::*;
pub use emitter::*;
pub use error::*;
pub use perfdata::*;
pub use range::*;
pub use report::*;
pub use run::*;
pub use severity::*;
pub use thresholds::*;
pub use writer::*;
