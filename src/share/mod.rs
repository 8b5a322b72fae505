//! Handing an exported file to something that can deliver it.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{ExportError, ExportResult};

pub const SHARE_DIALOG_TITLE: &str = "Export Contacts";

/// Placeholder replaced by the file path in share command arguments.
pub const PATH_PLACEHOLDER: &str = "{path}";

pub trait ShareSheet {
    fn is_available(&self) -> bool;

    fn share(&self, path: &Path, mime_type: &str, title: &str) -> ExportResult<()>;
}

/// Sharing is not available on this system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareSheet;

impl ShareSheet for NoShareSheet {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&self, _path: &Path, _mime_type: &str, _title: &str) -> ExportResult<()> {
        Err(ExportError::ShareFailed("sharing is not available".into()))
    }
}

/// Runs an external program (e.g. `xdg-open`) with the exported file.
/// Arguments equal to `{path}` are replaced by the path; without a
/// placeholder the path is appended.
#[derive(Debug, Clone, Default)]
pub struct CommandShareSheet {
    command: Vec<String>,
}

impl CommandShareSheet {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn build(&self, path: &Path) -> Option<Command> {
        let (program, args) = self.command.split_first()?;
        let path_arg = path.to_string_lossy();
        let mut cmd = Command::new(program);
        let mut has_placeholder = false;
        for arg in args {
            if arg == PATH_PLACEHOLDER {
                has_placeholder = true;
                cmd.arg(path_arg.as_ref());
            } else {
                cmd.arg(arg);
            }
        }
        if !has_placeholder {
            cmd.arg(path_arg.as_ref());
        }
        Some(cmd)
    }
}

impl ShareSheet for CommandShareSheet {
    fn is_available(&self) -> bool {
        self.command
            .first()
            .map(|p| !p.trim().is_empty())
            .unwrap_or(false)
    }

    fn share(&self, path: &Path, mime_type: &str, title: &str) -> ExportResult<()> {
        let mut cmd = self
            .build(path)
            .ok_or_else(|| ExportError::ShareFailed("no share command configured".into()))?;
        cmd.env("SHARE_MIME_TYPE", mime_type).env("SHARE_TITLE", title);
        debug!(command = ?cmd, "running share command");

        let status = cmd
            .status()
            .map_err(|e| ExportError::ShareFailed(format!("{}: {}", self.command[0], e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(ExportError::ShareFailed(format!(
                "{} exited with {}",
                self.command[0], status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_unavailable() {
        assert!(!CommandShareSheet::default().is_available());
        assert!(!CommandShareSheet::new(vec!["  ".into()]).is_available());
    }

    #[test]
    fn placeholder_is_replaced_by_path() {
        let sheet = CommandShareSheet::new(vec!["open".into(), "-a".into(), "{path}".into()]);
        let cmd = sheet.build(Path::new("/tmp/x.xlsx")).unwrap();
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["-a", "/tmp/x.xlsx"]);
    }

    #[test]
    fn path_is_appended_without_placeholder() {
        let sheet = CommandShareSheet::new(vec!["xdg-open".into()]);
        let cmd = sheet.build(Path::new("/tmp/x.xlsx")).unwrap();
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["/tmp/x.xlsx"]);
    }
}
