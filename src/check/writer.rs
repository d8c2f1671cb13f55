// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Destinations for rendered reports.
//!
//! Each report is written as one unit: plugin text may span several lines but
//! is never interleaved with another report.

use std::convert::Infallible;
use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WriterError {
    #[error("failed to write report")]
    IoError(#[from] io::Error),
}

/// A user supplied report destination.
#[async_trait]
pub trait Writer {
    async fn write(&self, report: &str) -> Result<(), io::Error>;
}

pub enum WriterType {
    Stdout(StdoutWriter),
    File(FileWriter),
    Buffer(BufferWriter),
    Custom(Box<dyn Writer + Send + Sync + 'static>),
}

/// Truncates the target file on creation and appends one report per write.
pub struct FileWriter {
    file: Mutex<fs::File>,
}

impl FileWriter {
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let file = fs::File::create(path).await?;
        Ok(FileWriter {
            file: Mutex::new(file),
        })
    }

    pub async fn write(&self, report: &str) -> Result<(), io::Error> {
        let mut file = self.file.lock().await;
        file.write_all(format!("{report}\n").as_bytes()).await?;
        file.flush().await
    }
}

/// Collects reports in memory, mostly for tests and embedding callers.
#[derive(Debug)]
pub struct BufferWriter {
    reports: Arc<Mutex<Vec<String>>>,
}

impl BufferWriter {
    pub fn new(reports: Arc<Mutex<Vec<String>>>) -> Self {
        Self { reports }
    }

    pub async fn write(&self, report: &str) -> Result<(), Infallible> {
        self.reports.lock().await.push(report.to_owned());
        Ok(())
    }
}

/// Plugin output as the scheduler reads it.
#[derive(Debug, Default, Clone)]
pub struct StdoutWriter {}

impl StdoutWriter {
    pub fn new() -> Self {
        StdoutWriter {}
    }

    pub async fn write(&self, report: &str) -> Result<(), Infallible> {
        println!("{report}");
        Ok(())
    }
}
