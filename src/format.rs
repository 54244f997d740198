use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub const DEFAULT_COMMAND: &str = "gofmt";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("{command} timed out after {ms}ms")]
    Timeout { command: String, ms: u64 },
    #[error("{command} failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// External pretty-printer: source on stdin, formatted source on stdout.
/// A non-zero exit means the source was rejected.
#[derive(Debug, Clone)]
pub struct Formatter {
    pub command: String,
    pub args: Vec<String>,
    pub timeout_ms: Option<u64>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self { command: DEFAULT_COMMAND.into(), args: vec![], timeout_ms: None }
    }
}

impl Formatter {
    /// Short name used in error messages, e.g. "gofmt" for "/usr/bin/gofmt".
    pub fn name(&self) -> &str {
        std::path::Path::new(&self.command)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.command)
    }

    pub async fn run(&self, src: &[u8]) -> Result<Vec<u8>, FormatError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| FormatError::Spawn {
            command: self.command.clone(),
            source,
        })?;
        tracing::debug!(command = %self.command, args = ?self.args, bytes = src.len(), "formatter spawned");

        // Feed stdin from a separate task so a chatty formatter cannot fill its
        // stdout pipe while we are still writing.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("capture stdin"))?;
        let input = src.to_vec();
        let writer = tokio::spawn(async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await
        });

        let fut = child.wait_with_output();
        let out = if let Some(ms) = self.timeout_ms {
            tokio::time::timeout(Duration::from_millis(ms), fut)
                .await
                .map_err(|_| FormatError::Timeout { command: self.command.clone(), ms })??
        } else {
            fut.await?
        };
        let written = writer.await.map_err(std::io::Error::other)?;

        if !out.status.success() {
            let stderr = strip_ansi_escapes::strip(&out.stderr);
            return Err(FormatError::Failed {
                command: self.command.clone(),
                status: out.status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }
        match written {
            // The formatter may legitimately stop reading early.
            Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
            _ => {}
        }
        Ok(out.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(command: &str, args: &[&str], timeout_ms: Option<u64>) -> Formatter {
        Formatter {
            command: command.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            timeout_ms,
        }
    }

    #[test]
    fn name_strips_directories() {
        assert_eq!(formatter("/usr/local/go/bin/gofmt", &[], None).name(), "gofmt");
        assert_eq!(Formatter::default().name(), "gofmt");
    }

    #[tokio::test]
    async fn passes_stdout_through() {
        let src = b"package main\n\nfunc main() {}\n";
        let out = formatter("cat", &[], None).run(src).await.unwrap();
        assert_eq!(out, src);
    }

    #[tokio::test]
    async fn large_inputs_do_not_deadlock() {
        let src = vec![b'x'; 1 << 20];
        let out = formatter("cat", &[], Some(10_000)).run(&src).await.unwrap();
        assert_eq!(out.len(), src.len());
    }

    #[tokio::test]
    async fn non_zero_exit_is_rejected() {
        let err = formatter("false", &[], None).run(b"x").await.unwrap_err();
        assert!(matches!(err, FormatError::Failed { .. }));
    }

    #[tokio::test]
    async fn stderr_is_reported_without_ansi() {
        let err = formatter("sh", &["-c", "printf '\\033[31mbad syntax\\033[0m' >&2; exit 2"], None)
            .run(b"x")
            .await
            .unwrap_err();
        match err {
            FormatError::Failed { stderr, .. } => assert_eq!(stderr, "bad syntax"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_command_fails_to_spawn() {
        let err = formatter("goat-no-such-formatter", &[], None)
            .run(b"x")
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::Spawn { .. }));
    }

    #[tokio::test]
    async fn slow_formatter_times_out() {
        let err = formatter("sleep", &["5"], Some(50)).run(b"x").await.unwrap_err();
        assert!(matches!(err, FormatError::Timeout { ms: 50, .. }));
    }
}
