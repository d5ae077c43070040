//! Writing kernel control files.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Destination for writes to sysfs control files
///
/// Implemented by [`FsWriter`] for the real filesystem; tests substitute a
/// recorder to observe the exact sequence of writes.
pub trait SysfsWriter {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes straight to the filesystem
///
/// The file is opened write-only and truncated but never created: sysfs
/// attributes only exist when the kernel provides them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl SysfsWriter for FsWriter {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }
}

impl<W: SysfsWriter + ?Sized> SysfsWriter for &W {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}
