//! Compose file and target container discovery
//!
//! The compose file is located one of three ways, in priority order: an
//! explicit `--file` path, a `--search-root` directory scan, or an upward
//! walk from the current directory trying the standard file names at each
//! level (the same shape as walking up to find a workspace root).

use std::path::{Path, PathBuf};

use normpath::PathExt;
use walkdir::WalkDir;
use wax::{Glob, Pattern};

use crate::docker::{self, ContainerInfo};
use crate::error::{Result, TowerupError};

/// Standard compose file names, tried in this order at each directory level.
pub const COMPOSE_FILE_NAMES: [&str; 4] = [
    "docker-compose.yml",
    "docker-compose.yaml",
    "compose.yml",
    "compose.yaml",
];

const COMPOSE_FILE_GLOB: &str = "{docker-compose,compose}.{yml,yaml}";

/// How deep a `--search-root` scan descends.
const SEARCH_DEPTH: usize = 4;

/// Locate the compose file to operate on.
pub fn find_compose_file(
    explicit: Option<&Path>,
    search_root: Option<&Path>,
    start: &Path,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = expand_tilde(path);
        if path.is_file() {
            return Ok(normalized(&path));
        }
        return Err(TowerupError::FileReadFailed {
            path: path.display().to_string(),
            reason: "no such file".to_string(),
        });
    }

    if let Some(root) = search_root {
        return scan_for_compose_file(&expand_tilde(root));
    }

    find_upward(start).ok_or(TowerupError::ComposeFileNotFound)
}

/// Walk upward from `start`, trying the standard names at each level.
fn find_upward(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in COMPOSE_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(normalized(&candidate));
            }
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Depth-limited scan under `root`; exactly one match is required.
fn scan_for_compose_file(root: &Path) -> Result<PathBuf> {
    let glob = Glob::new(COMPOSE_FILE_GLOB).map_err(|e| TowerupError::IoError {
        message: e.to_string(),
    })?;

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root)
        .max_depth(SEARCH_DEPTH)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if entry.file_type().is_file() && glob.is_match(&*entry.file_name().to_string_lossy()) {
            matches.push(entry.into_path());
        }
    }

    match matches.len() {
        0 => Err(TowerupError::ComposeFileNotFound),
        1 => Ok(normalized(&matches[0])),
        count => Err(TowerupError::AmbiguousComposeFile {
            root: root.display().to_string(),
            count,
            candidates: matches
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// The running container the update schedule is scoped to.
pub fn find_target_container(filter: &str) -> Result<ContainerInfo> {
    docker::running_containers()?
        .into_iter()
        .find(|c| c.matches(filter))
        .ok_or_else(|| TowerupError::TargetContainerNotFound {
            filter: filter.to_string(),
        })
}

/// A running container by its exact (primary) name, if any.
pub fn find_container_by_name(name: &str) -> Result<Option<ContainerInfo>> {
    Ok(docker::running_containers()?
        .into_iter()
        .find(|c| c.primary_name() == name))
}

fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

/// Normalize for display and comparison; fall back to the path as given.
fn normalized(path: &Path) -> PathBuf {
    path.normalize()
        .map(normpath::BasePathBuf::into_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_file_wins() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("my-stack.yml");
        fs::write(&file, "n8n:\n").unwrap();

        let found = find_compose_file(Some(file.as_path()), None, temp.path()).unwrap();
        assert!(found.ends_with("my-stack.yml"));
    }

    #[test]
    fn test_explicit_file_missing_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = find_compose_file(Some(missing.as_path()), None, temp.path()).unwrap_err();
        assert!(matches!(err, TowerupError::FileReadFailed { .. }));
    }

    #[test]
    fn test_upward_walk_finds_file_in_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("docker-compose.yml"), "n8n:\n").unwrap();
        let nested = temp.path().join("deep/nested/dir");
        fs::create_dir_all(&nested).unwrap();

        let found = find_compose_file(None, None, &nested).unwrap();
        assert!(found.ends_with("docker-compose.yml"));
    }

    #[test]
    fn test_upward_walk_tries_all_standard_names() {
        for name in COMPOSE_FILE_NAMES {
            let temp = TempDir::new().unwrap();
            fs::write(temp.path().join(name), "n8n:\n").unwrap();
            let found = find_compose_file(None, None, temp.path()).unwrap();
            assert!(found.ends_with(name), "failed for {name}");
        }
    }

    #[test]
    fn test_scan_single_match() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("stacks/n8n");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("compose.yaml"), "n8n:\n").unwrap();

        let found = find_compose_file(None, Some(temp.path()), temp.path()).unwrap();
        assert!(found.ends_with("compose.yaml"));
    }

    #[test]
    fn test_scan_no_match() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("unrelated.yml"), "x:\n").unwrap();
        let err = find_compose_file(None, Some(temp.path()), temp.path()).unwrap_err();
        assert!(matches!(err, TowerupError::ComposeFileNotFound));
    }

    #[test]
    fn test_scan_ambiguous_lists_candidates() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join("docker-compose.yml"), "x:\n").unwrap();
        fs::write(b.join("compose.yml"), "y:\n").unwrap();

        let err = find_compose_file(None, Some(temp.path()), temp.path()).unwrap_err();
        match err {
            TowerupError::AmbiguousComposeFile {
                count, candidates, ..
            } => {
                assert_eq!(count, 2);
                assert!(candidates.contains("docker-compose.yml"));
                assert!(candidates.contains("compose.yml"));
            }
            other => panic!("expected AmbiguousComposeFile, got {other:?}"),
        }
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths_alone() {
        let plain = Path::new("/opt/n8n/docker-compose.yml");
        assert_eq!(expand_tilde(plain), plain.to_path_buf());
    }
}
