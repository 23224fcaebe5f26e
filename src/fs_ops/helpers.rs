//! I/O error helpers.
//!
//! Wraps io::Error with the operation, the path involved and a short hint, so a
//! failed copy or rename tells the user what to check.
//!
//! Usage:
//!   fs::copy(src, &dst).map_err(io_error_with_help("copy file", src))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Hint keyed by raw OS error code, when the platform gives us one.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EACCES | libc::EPERM => Some("permission denied; check ownership and read/write permissions"),
        libc::EXDEV => Some("cross-filesystem; staging and output must share a filesystem"),
        libc::ENOENT => Some("path not found; it may have vanished during the walk"),
        libc::EEXIST | libc::ENOTEMPTY => Some("already exists; pick another output name"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long"),
        libc::EMFILE | libc::ENFILE => Some("too many open files"),
        _ => None,
    }
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),
        17 => Some("not same device; staging and output must share a volume"),
        2 | 3 => Some("path not found; it may have vanished during the walk"),
        80 | 183 => Some("already exists; pick another output name"),
        112 => Some("insufficient disk space"),
        206 => Some("filename or path too long"),
        _ => None,
    }
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and read/write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have vanished during the walk"),
        io::ErrorKind::AlreadyExists => Some("already exists; pick another output name"),
        _ => None,
    }
}

/// Format "<op> '<path>': <error> - <hint> [os code: N]".
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = e.raw_os_error().and_then(os_hint).or_else(|| kind_hint(e.kind()));
    if let Some(hint) = hint {
        msg.push_str(" - ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for anyhow::Result code: `.map_err(io_error_with_help(op, path))`.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
