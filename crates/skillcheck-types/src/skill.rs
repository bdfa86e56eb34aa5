//! Skill layout and verification report types.
//!
//! A [`SkillLayout`] names a skill and the files it must ship. A verification
//! pass over a layout produces a [`VerifyReport`] whose [`MissingList`] keeps
//! the declaration order of the layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{LayoutError, VerifyError};

// ---------------------------------------------------------------------------
// Layouts
// ---------------------------------------------------------------------------

/// A named skill bundle and the relative paths it must contain.
///
/// Layouts are compile-time constants; there is no runtime configuration of
/// the required file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLayout {
    pub name: &'static str,
    pub required_files: &'static [&'static str],
}

/// The `designing-nextjs-ui` documentation skill.
pub const DESIGNING_NEXTJS_UI: SkillLayout = SkillLayout {
    name: "designing-nextjs-ui",
    required_files: &[
        "SKILL.md",
        "references/ui-patterns.md",
        "references/visual-effects.md",
        "references/layout-patterns.md",
        "references/typography-advanced.md",
    ],
};

impl SkillLayout {
    /// Check the required file list invariants.
    ///
    /// Checks:
    /// - the list is non-empty
    /// - no entry is blank
    /// - every entry is relative
    /// - no entry climbs out of the skill root via `..`
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.required_files.is_empty() {
            return Err(LayoutError::Empty(self.name.to_owned()));
        }

        for (idx, entry) in self.required_files.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(LayoutError::BlankEntry(idx));
            }

            let path = Path::new(entry);
            if path.is_absolute() || path.has_root() {
                return Err(LayoutError::AbsolutePath((*entry).to_owned()));
            }
            if path.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(LayoutError::ParentTraversal((*entry).to_owned()));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Required paths found absent during one pass, in declaration order.
///
/// Displays as a bracketed list of single-quoted paths, e.g.
/// `['SKILL.md', 'references/ui-patterns.md']`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingList(Vec<String>);

impl MissingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for MissingList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl fmt::Display for MissingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, path) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{path}'")?;
        }
        f.write_str("]")
    }
}

/// Outcome of a single verification pass over a skill directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub skill: String,
    pub base_dir: PathBuf,
    pub missing: MissingList,
}

impl VerifyReport {
    /// True when every required file was found.
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }

    /// Convert a failed report into [`VerifyError::MissingRequiredFiles`].
    pub fn into_result(self) -> Result<Self, VerifyError> {
        if self.is_ready() {
            Ok(self)
        } else {
            Err(VerifyError::MissingRequiredFiles {
                skill: self.skill,
                missing: self.missing,
            })
        }
    }
}
