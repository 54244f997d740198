use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum Emitted {
    Stdout,
    Written(PathBuf),
    /// The file already held identical bytes and was left alone.
    Unchanged(PathBuf),
}

pub fn emit(target: Option<&Path>, bytes: &[u8], force: bool) -> io::Result<Emitted> {
    let Some(path) = target else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        return Ok(Emitted::Stdout);
    };
    if !force && same_contents(path, bytes) {
        tracing::debug!(path = %path.display(), "output unchanged, skipping write");
        return Ok(Emitted::Unchanged(path.to_path_buf()));
    }
    fs::write(path, bytes)?;
    Ok(Emitted::Written(path.to_path_buf()))
}

fn same_contents(path: &Path, bytes: &[u8]) -> bool {
    match fs::read(path) {
        Ok(existing) => blake3::hash(&existing) == blake3::hash(bytes),
        Err(_) => false,
    }
}
