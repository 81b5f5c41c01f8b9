//! Helpers for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use tienda_api::db::{DbPool, establish_connection_pool, run_migrations};

/// Migrated SQLite database living in its own temporary directory.
pub struct TestDb {
    // Declared before `dir` so connections close before the directory is removed.
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
