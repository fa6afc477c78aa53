// SPDX-License-Identifier: MPL-2.0
//! Simulated upload.
//!
//! No bytes leave the machine: the task waits for a fixed delay and then
//! reports success. There is no failure path.

use super::state::QualityTag;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;

/// Identifies one upload attempt within a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadTicket(u64);

impl UploadTicket {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What would be sent to a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub ticket: UploadTicket,
    pub file_name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub quality: QualityTag,
}

/// Outcome of a finished upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub ticket: UploadTicket,
    pub file_name: String,
    pub quality: QualityTag,
    pub elapsed: Duration,
}

/// Runs the simulated upload for `request`, completing after `delay`.
pub async fn simulate(request: UploadRequest, delay: Duration) -> UploadReceipt {
    log::info!(
        "uploading {} ({} bytes, quality {})",
        request.file_name,
        request.size_bytes,
        request.quality
    );
    let started = Instant::now();
    tokio::time::sleep(delay).await;
    let elapsed = started.elapsed();
    log::info!("upload of {} finished in {elapsed:?}", request.file_name);

    UploadReceipt {
        ticket: request.ticket,
        file_name: request.file_name,
        quality: request.quality,
        elapsed,
    }
}
