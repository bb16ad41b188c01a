use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Permission bits requested for new directories, before the umask applies.
pub const MKDIR_MODE: u32 = 0o777;

/// Creates a single directory at `path`.
///
/// Parents are not created. Fails with [`io::ErrorKind::AlreadyExists`] when
/// `path` exists and [`io::ErrorKind::NotFound`] when its parent is missing.
pub fn mkdir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();

    #[allow(unused_mut)]
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(MKDIR_MODE);
    }

    builder.create(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("failed to create directory `{}`: {e}", path.display()),
        )
    })?;

    log::debug!("Created directory {}", path.display());
    Ok(())
}

/// Copies the file at `old` to `new` and returns the path written.
///
/// An existing file at `new` is overwritten. When `new` is a directory the
/// file lands inside it under the name of `old`.
pub fn copy_file<P, Q>(old: P, new: Q) -> io::Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let old = old.as_ref();
    let mut dest = new.as_ref().to_path_buf();

    if dest.is_dir() {
        let name = old.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("source `{}` has no file name", old.display()),
            )
        })?;
        dest.push(name);
    }

    // Copying a file onto itself (same path, symlink or hard link) would truncate it first
    if dest.exists() && same_file::is_same_file(old, &dest)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "`{}` and `{}` are the same file",
                old.display(),
                dest.display()
            ),
        ));
    }

    let bytes = fs_err::copy(old, &dest)?;
    log::debug!(
        "Copied {} bytes from {} to {}",
        bytes,
        old.display(),
        dest.display()
    );
    Ok(dest)
}
