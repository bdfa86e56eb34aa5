//! Required-file existence pass.
//!
//! The verifier binary is installed at `<skill>/scripts/<binary>`, so the
//! skill root is two directory levels above the executable. Lookups never
//! depend on the process working directory.

use std::path::{Path, PathBuf};

use skillcheck_types::error::VerifyError;
use skillcheck_types::skill::{MissingList, SkillLayout, VerifyReport};

/// Resolve the skill base directory from an executable path.
///
/// Relative paths are made absolute against the current directory first,
/// then two `parent()` steps are taken.
pub fn resolve_base_dir(exe_path: &Path) -> Result<PathBuf, VerifyError> {
    let exe_path = std::path::absolute(exe_path).map_err(|e| {
        VerifyError::BaseDirUnresolved(format!("{}: {e}", exe_path.display()))
    })?;

    exe_path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            VerifyError::BaseDirUnresolved(format!(
                "{} has no grandparent directory",
                exe_path.display()
            ))
        })
}

/// Checks a skill directory against its layout.
#[derive(Debug, Clone)]
pub struct Verifier {
    layout: SkillLayout,
    base_dir: PathBuf,
}

impl Verifier {
    /// Build a verifier for `layout` rooted at `base_dir`.
    ///
    /// Fails with [`VerifyError::InvalidLayout`] if the layout breaks its
    /// invariants.
    pub fn new(layout: SkillLayout, base_dir: impl Into<PathBuf>) -> Result<Self, VerifyError> {
        layout.validate()?;
        Ok(Self {
            layout,
            base_dir: base_dir.into(),
        })
    }

    /// Build a verifier rooted two levels above the running executable.
    pub fn from_executable(layout: SkillLayout) -> Result<Self, VerifyError> {
        let exe = std::env::current_exe()
            .map_err(|e| VerifyError::BaseDirUnresolved(format!("current executable: {e}")))?;
        let base_dir = resolve_base_dir(&exe)?;
        Self::new(layout, base_dir)
    }

    pub fn layout(&self) -> &SkillLayout {
        &self.layout
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Run one existence pass.
    ///
    /// Each required path is joined onto the base directory and tested in
    /// declaration order. Files and directories both count as present;
    /// dangling symlinks and unreadable paths count as missing.
    pub fn verify(&self) -> VerifyReport {
        let mut missing = MissingList::new();

        for relative in self.layout.required_files {
            let path = self.base_dir.join(relative);
            let exists = path.exists();
            tracing::debug!(path = %path.display(), exists, "checked required file");
            if !exists {
                missing.push(*relative);
            }
        }

        if missing.is_empty() {
            tracing::info!(skill = self.layout.name, "all required files present");
        } else {
            tracing::info!(
                skill = self.layout.name,
                missing = missing.len(),
                "skill is missing required files"
            );
        }

        VerifyReport {
            skill: self.layout.name.to_owned(),
            base_dir: self.base_dir.clone(),
            missing,
        }
    }
}
