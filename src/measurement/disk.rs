//! Cost of a synchronous, unbuffered disk write.
//!
//! Unlike the other primitives this loop is not unrolled: one iteration is
//! one block write, and each write must reach the device rather than the
//! page cache. The scratch file is created fresh for every call and is
//! gone again by the time the call returns, success or failure.

use std::alloc::{self, Layout};
use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::slice;

use rand::Rng;

use super::timer::{elapsed_ns_per_op, Timestamp};
use crate::config::{default_scratch_path, effective_iterations};
use crate::constants::BLOCK_SIZE;
use crate::error::MeasureError;

/// Heap block aligned to its own size, as direct I/O requires.
///
/// Freed on drop, so every exit path of the measurement releases it.
struct AlignedBlock {
    ptr: *mut u8,
    layout: Layout,
}

impl AlignedBlock {
    fn new(size: usize) -> Result<Self, MeasureError> {
        let layout = Layout::from_size_align(size, size).map_err(|_| MeasureError::BufferAlloc)?;
        // SAFETY: `layout` has non-zero size.
        let ptr = unsafe { alloc::alloc(layout) };
        if ptr.is_null() {
            return Err(MeasureError::BufferAlloc);
        }
        Ok(Self { ptr, layout })
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: `ptr` is valid for `layout.size()` bytes and exclusively
        // owned by this block.
        unsafe { slice::from_raw_parts_mut(self.ptr, self.layout.size()) }
    }
}

impl Drop for AlignedBlock {
    fn drop(&mut self) {
        // SAFETY: allocated in `new` with this exact layout.
        unsafe { alloc::dealloc(self.ptr, self.layout) }
    }
}

/// An exclusively created scratch file opened for synchronous direct I/O.
///
/// Closing the descriptor and unlinking the path happen on drop, so the
/// file cannot outlive the measurement on any exit path.
struct ScratchFile {
    fd: libc::c_int,
    c_path: CString,
}

impl ScratchFile {
    fn create(path: &Path) -> Result<Self, MeasureError> {
        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
            MeasureError::Open(io::Error::new(
                io::ErrorKind::InvalidInput,
                "scratch path contains a NUL byte",
            ))
        })?;

        // SAFETY: `c_path` is a valid NUL-terminated string.
        let fd = unsafe { libc::open(c_path.as_ptr(), open_flags(), 0o600 as libc::c_uint) };
        if fd < 0 {
            let err = io::Error::last_os_error();
            // The path must not exist once the call returns, even when the
            // open itself failed on a stale file from an earlier crash.
            // SAFETY: `c_path` is a valid NUL-terminated string.
            unsafe { libc::unlink(c_path.as_ptr()) };
            return Err(MeasureError::Open(err));
        }

        #[cfg(target_os = "macos")]
        {
            // No O_DIRECT on macOS; F_NOCACHE keeps writes off the cache.
            // SAFETY: `fd` is a descriptor we just opened.
            unsafe { libc::fcntl(fd, libc::F_NOCACHE, 1) };
        }

        Ok(Self { fd, c_path })
    }

    /// Write one full block; `Err` carries the OS error of a failed write.
    fn write_block(&self, block: &AlignedBlock) -> Result<(), io::Error> {
        // SAFETY: `block.ptr` is valid for `layout.size()` bytes and `fd`
        // is open for writing.
        let rc = unsafe {
            libc::write(
                self.fd,
                block.ptr as *const libc::c_void,
                block.layout.size(),
            )
        };
        if rc < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        // SAFETY: `fd` is an open descriptor owned by this guard and
        // `c_path` is a valid NUL-terminated string.
        unsafe {
            libc::close(self.fd);
            libc::unlink(self.c_path.as_ptr());
        }
    }
}

#[cfg(target_os = "linux")]
fn open_flags() -> libc::c_int {
    libc::O_RDWR | libc::O_CREAT | libc::O_EXCL | libc::O_SYNC | libc::O_DIRECT
}

#[cfg(not(target_os = "linux"))]
fn open_flags() -> libc::c_int {
    libc::O_RDWR | libc::O_CREAT | libc::O_EXCL | libc::O_SYNC
}

/// Measure the wall-clock cost of one synchronous block write, in
/// nanoseconds, using the default scratch path.
///
/// See [`measure_disk_write_at`].
pub fn measure_disk_write(iterations: u64) -> Result<f64, MeasureError> {
    measure_disk_write_at(&default_scratch_path(), iterations)
}

/// Measure the wall-clock cost of one synchronous block write, in
/// nanoseconds, against a caller-chosen scratch path.
///
/// Each iteration writes one [`BLOCK_SIZE`] block to a freshly created
/// file opened for exclusive, synchronous, unbuffered access. The file
/// descriptor, the file itself, and the aligned buffer are all released on
/// every exit path. `iterations == 0` selects the default count.
///
/// A write failure does not stop the loop; it is recorded and surfaced
/// only after the end timestamp, so a failed pass never cuts the measured
/// window short.
///
/// # Errors
///
/// [`MeasureError::BufferAlloc`] if the aligned buffer cannot be
/// allocated, [`MeasureError::Open`] if the exclusive create fails (for
/// instance when the path already exists, or the filesystem does not
/// support direct I/O), [`MeasureError::Clock`] if either clock read
/// fails, and [`MeasureError::Write`] if any write failed.
pub fn measure_disk_write_at(path: &Path, iterations: u64) -> Result<f64, MeasureError> {
    let iterations = effective_iterations(iterations);

    let mut block = AlignedBlock::new(BLOCK_SIZE)?;
    rand::rng().fill(block.as_mut_slice());

    let file = ScratchFile::create(path)?;

    let start = Timestamp::now()?;
    let mut completed: u64 = 0;
    let mut write_error: Option<io::Error> = None;
    while completed < iterations {
        if let Err(err) = file.write_block(&block) {
            if write_error.is_none() {
                write_error = Some(err);
            }
        }
        completed += 1;
    }
    let end = Timestamp::now()?;

    if let Some(err) = write_error {
        return Err(MeasureError::Write(err));
    }

    Ok(elapsed_ns_per_op(start, end, completed))
}
