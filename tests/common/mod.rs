//! Common test utilities for towerup integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A minimal n8n stack the way people actually write them by hand.
#[allow(dead_code)]
pub const BASE_STACK: &str = "\
n8n:
  image: n8nio/n8n
  restart: always
  ports:
    - \"5678:5678\"
  environment:
    - GENERIC_TIMEZONE=UTC

volumes:
  n8n_data:
";

/// A temp directory holding one compose file under test
pub struct TestStack {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the directory root
    pub path: PathBuf,
}

impl TestStack {
    /// Create an empty stack directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a stack directory with a docker-compose.yml
    #[allow(dead_code)]
    pub fn with_compose(content: &str) -> Self {
        let stack = Self::new();
        stack.write_compose(content);
        stack
    }

    /// Path of the compose file
    pub fn compose_path(&self) -> PathBuf {
        self.path.join("docker-compose.yml")
    }

    /// (Over)write the compose file
    pub fn write_compose(&self, content: &str) {
        std::fs::write(self.compose_path(), content).expect("Failed to write compose file");
    }

    /// Read the compose file back
    #[allow(dead_code)]
    pub fn read_compose(&self) -> String {
        std::fs::read_to_string(self.compose_path()).expect("Failed to read compose file")
    }
}
