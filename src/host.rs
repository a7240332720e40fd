//! Host identity as a caller-owned context.
//!
//! The machine name annotates reports so measurements from different hosts
//! can be told apart. Identity is established once, explicitly, before
//! measuring, and released when the value is dropped. No measurement
//! primitive reads it; only the report aggregator does.

use std::io;

use crate::constants::HOSTNAME_MAX;
use crate::error::HostIdError;

/// The machine name of the current host, queried once at construction.
///
/// Each [`HostId::detect`] call returns an independent value, so several
/// may coexist (for instance across test runs) without shared state.
#[derive(Debug, Clone)]
pub struct HostId {
    name: String,
}

impl HostId {
    /// Query the OS for the host name.
    ///
    /// On failure the identity is left entirely unset; the error carries
    /// the OS cause and no partially-filled name escapes.
    ///
    /// # Errors
    ///
    /// [`HostIdError::Hostname`] if the `gethostname` query fails.
    pub fn detect() -> Result<Self, HostIdError> {
        let mut buf = vec![0u8; HOSTNAME_MAX];

        // SAFETY: `buf` is writable for HOSTNAME_MAX bytes.
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
        if rc != 0 {
            return Err(HostIdError::Hostname(io::Error::last_os_error()));
        }

        // gethostname need not NUL-terminate a truncated name.
        let len = buf.len();
        buf[len - 1] = 0;
        let end = buf.iter().position(|&b| b == 0).unwrap_or(len);
        let name = String::from_utf8_lossy(&buf[..end]).into_owned();

        Ok(Self { name })
    }

    /// The detected machine name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
