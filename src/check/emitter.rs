// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unwrap_infallible::UnwrapInfallible;

use crate::check::config::{self, OutputFormat};
use crate::check::writer::{self, WriterError, WriterType};
use crate::check::FinalReport;
use crate::format;

pub struct ReportEmitter {
    timestamp_provider: Box<dyn config::TimestampProvider + Send + Sync + 'static>,
    writer: writer::WriterType,
    format: OutputFormat,
}

impl ReportEmitter {
    pub(crate) fn new(config: config::Config) -> Self {
        ReportEmitter {
            timestamp_provider: config.timestamp_provider,
            writer: config.writer,
            format: config.format,
        }
    }

    fn serialize_report(&self, report: &FinalReport) -> String {
        match self.format {
            OutputFormat::Text => report.render(),
            OutputFormat::Json => {
                let root = format::Root {
                    report: report.to_artifact(),
                    timestamp: self.timestamp_provider.now(),
                };
                serde_json::json!(root).to_string()
            }
        }
    }

    pub async fn emit(&self, report: &FinalReport) -> Result<(), WriterError> {
        let s = self.serialize_report(report);

        match &self.writer {
            WriterType::File(file) => file.write(&s).await?,
            WriterType::Stdout(stdout) => stdout.write(&s).await.unwrap_infallible(),
            WriterType::Buffer(buffer) => buffer.write(&s).await.unwrap_infallible(),

            WriterType::Custom(custom) => custom.write(&s).await?,
        }

        Ok(())
    }
}
