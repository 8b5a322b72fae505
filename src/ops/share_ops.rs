use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::share::{ShareSheet, SHARE_DIALOG_TITLE};
use crate::sheet::XLSX_MIME_TYPE;

/// How an exported file reached the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the share sheet.
    Shared(PathBuf),
    /// No share sheet; the path is shown to the user instead.
    Disclosed(PathBuf),
}

impl ShareOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ShareOutcome::Shared(p) | ShareOutcome::Disclosed(p) => p,
        }
    }
}

/// Offers the file to the share sheet, falling back to disclosing its
/// path. The file already exists either way, so this never fails.
pub fn hand_off(sheet: &dyn ShareSheet, path: &Path) -> ShareOutcome {
    if !sheet.is_available() {
        info!(path = %path.display(), "share sheet unavailable, disclosing path");
        return ShareOutcome::Disclosed(path.to_path_buf());
    }
    match sheet.share(path, XLSX_MIME_TYPE, SHARE_DIALOG_TITLE) {
        Ok(()) => ShareOutcome::Shared(path.to_path_buf()),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "share failed, disclosing path");
            ShareOutcome::Disclosed(path.to_path_buf())
        }
    }
}
