use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("path does not exist: {0}")]
    Missing(String),
    #[error("could not launch {program}: {source}")]
    Spawn {
        program: &'static str,
        source: io::Error,
    },
}

/// The platform's file browser command
#[cfg(windows)]
const BROWSER: &str = "explorer";
#[cfg(target_os = "macos")]
const BROWSER: &str = "open";
#[cfg(not(any(windows, target_os = "macos")))]
const BROWSER: &str = "xdg-open";

/// Open `path` in the platform file browser.
///
/// Existence is checked again here since the path may have vanished since
/// it was last displayed. The caller does not wait for the browser.
pub fn open_in_file_browser(path: &str) -> Result<(), LaunchError> {
    if !Path::new(path).exists() {
        return Err(LaunchError::Missing(path.to_string()));
    }
    let mut cmd = Command::new(BROWSER);
    cmd.arg(path);
    spawn_reaped(cmd, BROWSER)?;
    tracing::debug!(path, program = BROWSER, "opened in file browser");
    Ok(())
}

/// Spawn `cmd` with null stdio and wait for it on a background thread, so
/// the child is reaped instead of lingering as a zombie.
fn spawn_reaped(mut cmd: Command, program: &'static str) -> Result<JoinHandle<()>, LaunchError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn { program, source })?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::warn!(program, %status, "file browser exited with an error");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(program, error = %e, "could not wait for file browser"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn vanished_path_is_reported() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone");
        let gone = gone.to_string_lossy();
        match open_in_file_browser(&gone) {
            Err(LaunchError::Missing(p)) => assert_eq!(p, gone),
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn launched_child_is_reaped() {
        let handle = spawn_reaped(Command::new("true"), "true").unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn unknown_program_is_a_spawn_error() {
        let result = spawn_reaped(Command::new("pathmark-no-such-program"), "pathmark-no-such-program");
        match result {
            Err(LaunchError::Spawn { program, .. }) => assert_eq!(program, "pathmark-no-such-program"),
            other => panic!("expected Spawn, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_message() {
        let err = LaunchError::Missing("/nope".into());
        assert_eq!(err.to_string(), "path does not exist: /nope");
    }
}
