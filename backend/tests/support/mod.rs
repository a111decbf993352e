#![allow(dead_code)]

use backend::report::ReportService;
use backend::store::Store;
use rusqlite::{params, Connection};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

pub const TABLE: &str = "etl_movie_data";

pub const SCHEMA: &str = "CREATE TABLE etl_movie_data (
    movie_id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    year INTEGER,
    imdb_id TEXT,
    box_office REAL,
    runtime_minutes INTEGER,
    director TEXT,
    imdb_rating REAL
);";

/// Returns the script shipped next to the crate manifest.
pub fn shipped_schema() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema.sql")
}

/// One row to insert. Unset fields stay NULL.
#[derive(Default, Clone)]
pub struct Movie {
    pub title: &'static str,
    pub box_office: Option<f64>,
    pub rating: Option<f64>,
    pub director: Option<&'static str>,
}

pub fn movie(title: &'static str, box_office: Option<f64>) -> Movie {
    Movie {
        title,
        box_office,
        ..Movie::default()
    }
}

/// Scratch database that is removed when the value drops.
pub struct TestCatalog {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl TestCatalog {
    /// An empty directory with no database file yet.
    pub fn bare() -> Self {
        let temp_dir = tempdir().expect("temp dir");
        let db_path = temp_dir.path().join("people.db");
        Self { temp_dir, db_path }
    }

    /// A database whose catalog table is created from `ddl`.
    pub fn with_schema(ddl: &str) -> Self {
        let catalog = Self::bare();
        catalog.connect().execute_batch(ddl).expect("apply schema");
        catalog
    }

    /// The standard catalog table, empty.
    pub fn empty() -> Self {
        Self::with_schema(SCHEMA)
    }

    /// The standard catalog table filled with `movies`, in order.
    pub fn with_movies(movies: &[Movie]) -> Self {
        let catalog = Self::empty();
        catalog.insert(movies);
        catalog
    }

    pub fn insert(&self, movies: &[Movie]) {
        let mut conn = self.connect();
        let tx = conn.transaction().expect("begin");
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO etl_movie_data (title, year, imdb_id, box_office, runtime_minutes, director, imdb_rating)
                     VALUES (?1, 2000, 'tt0000000', ?2, 120, ?3, ?4)",
                )
                .expect("prepare insert");
            for m in movies {
                stmt.execute(params![m.title, m.box_office, m.director, m.rating])
                    .expect("insert movie");
            }
        }
        tx.commit().expect("commit");
    }

    pub fn connect(&self) -> Connection {
        Connection::open(&self.db_path).expect("open test db")
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn store(&self) -> Store {
        Store::new(&self.db_path, TABLE)
    }

    pub fn service(&self) -> ReportService {
        ReportService::new(self.store(), "₹")
    }

    /// Writes `contents` into a file next to the database and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}
