use thiserror::Error;

use crate::skill::MissingList;

/// A skill layout that breaks the required-file invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("skill '{0}' declares no required files")]
    Empty(String),

    #[error("required file '{0}' must be relative to the skill root")]
    AbsolutePath(String),

    #[error("required file list contains a blank entry at position {0}")]
    BlankEntry(usize),

    #[error("required file '{0}' escapes the skill root")]
    ParentTraversal(String),
}

/// Errors surfaced by a verification pass.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("skill '{skill}' is missing files: {missing}")]
    MissingRequiredFiles { skill: String, missing: MissingList },

    #[error("cannot resolve skill base directory: {0}")]
    BaseDirUnresolved(String),

    #[error("invalid skill layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}
