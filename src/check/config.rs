// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::check::writer::{self, WriterError};

/// How a finished report is written out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plugin text: summary line, long text, performance data line.
    #[default]
    Text,
    /// One JSON document per report.
    Json,
}

/// The configuration repository for the CheckRun.
pub struct Config {
    pub(crate) timestamp_provider: Box<dyn TimestampProvider + Send + Sync + 'static>,
    pub(crate) writer: writer::WriterType,
    pub(crate) format: OutputFormat,
}

impl Config {
    /// Creates a new [`ConfigBuilder`]
    ///
    /// # Examples
    /// ```rust
    /// # use devcheck::check::*;
    ///
    /// let builder = Config::builder();
    /// ```
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

/// The builder for the [`Config`] object.
pub struct ConfigBuilder {
    timezone: Option<chrono_tz::Tz>,
    timestamp_provider: Option<Box<dyn TimestampProvider + Send + Sync + 'static>>,
    writer: Option<writer::WriterType>,
    format: OutputFormat,
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            timezone: None,
            timestamp_provider: None,
            writer: Some(writer::WriterType::Stdout(writer::StdoutWriter::new())),
            format: OutputFormat::Text,
        }
    }

    pub fn timezone(mut self, timezone: chrono_tz::Tz) -> Self {
        self.timezone = Some(timezone);
        self
    }

    pub fn with_timestamp_provider(
        mut self,
        timestamp_provider: Box<dyn TimestampProvider + Send + Sync + 'static>,
    ) -> Self {
        self.timestamp_provider = Some(timestamp_provider);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_buffer_output(mut self, buffer: Arc<Mutex<Vec<String>>>) -> Self {
        self.writer = Some(writer::WriterType::Buffer(writer::BufferWriter::new(
            buffer,
        )));
        self
    }

    pub async fn with_file_output<P: AsRef<Path>>(mut self, path: P) -> Result<Self, WriterError> {
        self.writer = Some(writer::WriterType::File(
            writer::FileWriter::new(path).await?,
        ));
        Ok(self)
    }

    pub fn with_custom_output(
        mut self,
        custom: Box<dyn writer::Writer + Send + Sync + 'static>,
    ) -> Self {
        self.writer = Some(writer::WriterType::Custom(custom));
        self
    }

    pub fn build(self) -> Config {
        let timezone = self.timezone.unwrap_or(chrono_tz::UTC);
        Config {
            timestamp_provider: self
                .timestamp_provider
                .unwrap_or(Box::new(ConfiguredTzProvider { tz: timezone })),
            writer: self
                .writer
                .unwrap_or(writer::WriterType::Stdout(writer::StdoutWriter::new())),
            format: self.format,
        }
    }
}

/// Source of the timestamp attached to JSON reports.
pub trait TimestampProvider {
    fn now(&self) -> chrono::DateTime<chrono_tz::Tz>;
}

struct ConfiguredTzProvider {
    tz: chrono_tz::Tz,
}

impl TimestampProvider for ConfiguredTzProvider {
    fn now(&self) -> chrono::DateTime<chrono_tz::Tz> {
        chrono::Utc::now().with_timezone(&self.tz)
    }
}
