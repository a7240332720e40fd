//! Error types for measurement and host identification.
//!
//! Every failure is scoped to the single call that produced it: nothing is
//! retried, nothing is escalated, and the aggregator always returns a
//! complete report with failed fields marked individually.

use std::io;

use thiserror::Error;

/// Failure of a single measurement primitive.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// The wall-clock read failed. Fatal to the current call only; no
    /// partial timing is ever reported.
    #[error("clock read failed: {0}")]
    Clock(#[source] io::Error),

    /// The block-aligned write buffer could not be allocated.
    #[error("aligned write buffer allocation failed")]
    BufferAlloc,

    /// The scratch file could not be created. A pre-existing file at the
    /// scratch path triggers this, since the open is exclusive-create.
    #[error("scratch file open failed: {0}")]
    Open(#[source] io::Error),

    /// At least one write during the disk measurement failed. Reported
    /// after the write loop completes; resources are released regardless.
    #[error("disk write failed: {0}")]
    Write(#[source] io::Error),
}

/// Failure to establish the host identity.
#[derive(Debug, Error)]
pub enum HostIdError {
    /// The OS hostname query failed; identity stays unset rather than
    /// partially filled.
    #[error("hostname query failed: {0}")]
    Hostname(#[source] io::Error),
}
