use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes synthesized audio buffers into the configured output directory.
#[derive(Debug, Clone)]
pub struct TrackWriter {
    out_dir: PathBuf,
}

impl TrackWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write the full audio buffer to `<out_dir>/<file_name>`.
    ///
    /// The file handle is dropped on every exit path. A failure leaves the
    /// threshold accounting to the caller; it is not retried here.
    ///
    /// # Errors
    /// Returns the underlying IO error when the file cannot be created or
    /// written.
    pub fn write(&self, file_name: &str, audio: &[u8]) -> io::Result<PathBuf> {
        let target = self.out_dir.join(file_name);
        let mut file = File::create(&target)?;
        file.write_all(audio)?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_should_write_the_buffer_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TrackWriter::new(dir.path());

        let path = writer.write("0001.mp3", b"fake mp3 bytes").unwrap();

        assert_eq!(path, dir.path().join("0001.mp3"));
        assert_eq!(std::fs::read(&path).unwrap(), b"fake mp3 bytes");
    }

    #[test]
    fn it_should_fail_when_the_directory_is_missing() {
        let writer = TrackWriter::new("/definitely/not/a/directory");

        assert!(writer.write("0001.mp3", b"audio").is_err());
    }
}
