//! Shorthand reference parsing
//!
//! Grammar: `gh:<owner>/<repository>[@<version>]/<file path>`.
//!
//! Splitting is single-pass and greedy (first `@`, first `/` after it), so a
//! literal `@` inside the file path cannot be told apart from a version
//! separator. Such inputs are rejected rather than guessed at.

use crate::error::{Error, Result};
use crate::remote::cache::VersionKind;
use std::fmt;
use std::str::FromStr;

/// Prefix marking a shorthand reference
pub const SHORTHAND_PREFIX: &str = "gh:";

const GRAMMAR_WITH_REF: &str = "gh:owner/repo@ref/filepath";
const GRAMMAR_WITHOUT_REF: &str = "gh:owner/repo/filepath";

/// Parsed shorthand reference; `version` is `None` until resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub owner: String,
    pub repository: String,
    pub version: Option<String>,
    /// Slash-separated path inside the repository
    pub file_path: String,
}

/// Reference whose version has been pinned to a concrete token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    pub owner: String,
    pub repository: String,
    pub version: String,
    pub file_path: String,
}

impl Reference {
    /// Whether `input` uses the shorthand grammar at all (as opposed to a plain path)
    pub fn is_shorthand(input: &str) -> bool {
        input.starts_with(SHORTHAND_PREFIX)
    }

    /// Parse a shorthand reference
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .strip_prefix(SHORTHAND_PREFIX)
            .ok_or_else(|| format_error(input, GRAMMAR_WITH_REF))?;

        let reference = match rest.split_once('@') {
            Some((repo_part, after)) => {
                let (owner, repository) = repo_part
                    .split_once('/')
                    .filter(|(_, repo)| !repo.contains('/'))
                    .ok_or_else(|| format_error(input, GRAMMAR_WITH_REF))?;
                let (version, file_path) = after
                    .split_once('/')
                    .ok_or_else(|| format_error(input, GRAMMAR_WITH_REF))?;
                if version.is_empty() {
                    return Err(format_error(input, GRAMMAR_WITH_REF));
                }
                Self {
                    owner: owner.to_string(),
                    repository: repository.to_string(),
                    version: Some(version.to_string()),
                    file_path: file_path.to_string(),
                }
            }
            None => {
                let mut parts = rest.splitn(3, '/');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(owner), Some(repository), Some(file_path)) => Self {
                        owner: owner.to_string(),
                        repository: repository.to_string(),
                        version: None,
                        file_path: file_path.to_string(),
                    },
                    _ => return Err(format_error(input, GRAMMAR_WITHOUT_REF)),
                }
            }
        };

        let grammar = if reference.version.is_some() {
            GRAMMAR_WITH_REF
        } else {
            GRAMMAR_WITHOUT_REF
        };
        if !reference.is_well_formed() {
            return Err(format_error(input, grammar));
        }
        Ok(reference)
    }

    fn is_well_formed(&self) -> bool {
        let is_name = |s: &str| !s.is_empty() && s != "." && s != "..";
        is_name(&self.owner)
            && is_name(&self.repository)
            && self.version.as_deref().map_or(true, is_name)
            && !self.file_path.contains('@')
            && self.file_path.split('/').all(is_name)
    }

    /// Pin the version to a concrete token (explicit or looked up)
    pub fn pin(self, version: String) -> ResolvedReference {
        ResolvedReference {
            owner: self.owner,
            repository: self.repository,
            version,
            file_path: self.file_path,
        }
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(
                f,
                "{}{}/{}@{}/{}",
                SHORTHAND_PREFIX, self.owner, self.repository, v, self.file_path
            ),
            None => write!(
                f,
                "{}{}/{}/{}",
                SHORTHAND_PREFIX, self.owner, self.repository, self.file_path
            ),
        }
    }
}

impl ResolvedReference {
    /// `owner/repository`
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }

    /// Cache file name: version and flattened path, so versions never collide
    pub fn cache_file_name(&self) -> String {
        format!("{}_{}", self.version, self.file_path.replace('/', "_"))
    }

    pub fn kind(&self) -> VersionKind {
        VersionKind::classify(&self.version)
    }
}

impl fmt::Display for ResolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}@{}/{}",
            SHORTHAND_PREFIX, self.owner, self.repository, self.version, self.file_path
        )
    }
}

fn format_error(input: &str, expected: &'static str) -> Error {
    Error::Format {
        input: input.to_string(),
        expected,
    }
}
