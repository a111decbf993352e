mod support;

use crate::support::{movie, Movie, TestCatalog};
use backend::report::assembler::{ReportAssembler, ReportLimits};
use backend::report::{Preview, FULL_PREVIEW_LIMIT};
use common::model::record::CatalogRecord;
use common::model::report::TopMeasure;
use rusqlite::params;

fn rated(title: &'static str, box_office: f64, rating: f64) -> Movie {
    Movie {
        title,
        box_office: Some(box_office),
        rating: Some(rating),
        ..Movie::default()
    }
}

fn titles(rows: &[CatalogRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn empty_table_yields_documented_defaults() {
    let catalog = TestCatalog::empty();
    let service = catalog.service();

    let report = service.build_summary_report();

    assert_eq!(service.record_count(), 0);
    assert_eq!(report.total_records, 0);
    assert_eq!(report.top_measure, TopMeasure::Unavailable);
    assert_eq!(report.top_measure_display, "—");
    assert!(report.preview.is_empty());
    assert!(report.chart.is_empty());
    assert_eq!(service.build_full_preview(), Preview::Empty);
}

#[test]
fn missing_database_degrades_without_creating_it() {
    let catalog = TestCatalog::bare();
    let service = catalog.service();

    let report = service.build_summary_report();

    assert_eq!(report.total_records, 0);
    assert_eq!(report.top_measure, TopMeasure::Unavailable);
    assert!(report.preview.is_empty());
    assert!(report.chart.is_empty());
    assert_eq!(report.rating_column, None);
    assert!(!catalog.db_path().exists());
}

#[test]
fn missing_table_degrades_to_defaults() {
    let catalog = TestCatalog::with_schema("CREATE TABLE unrelated (id INTEGER);");
    let report = catalog.service().build_summary_report();

    assert_eq!(report.total_records, 0);
    assert_eq!(report.top_measure, TopMeasure::Unavailable);
    assert!(report.preview.is_empty());
    assert_eq!(report.rating_column, None);
}

#[test]
fn ranking_coerces_null_and_respects_limit() {
    let catalog = TestCatalog::with_movies(&[
        movie("Hundred", Some(100.0)),
        movie("Two Hundred", Some(200.0)),
        movie("Unknown", None),
    ]);
    let store = catalog.store();
    let assembler = ReportAssembler::new(&store, "₹");

    let top_two = assembler.preview(2);
    assert_eq!(titles(&top_two), vec!["Two Hundred", "Hundred"]);
    assert_eq!(
        top_two.iter().map(|r| r.box_office).collect::<Vec<_>>(),
        vec![200.0, 100.0]
    );

    let all = assembler.preview(3);
    assert_eq!(all[2].title, "Unknown");
    assert_eq!(all[2].box_office, 0.0);
}

#[test]
fn ranking_does_not_write_the_coerced_value_back() {
    let catalog = TestCatalog::with_movies(&[movie("Unknown", None)]);
    catalog.service().build_summary_report();

    let stored: Option<f64> = catalog
        .connect()
        .query_row("SELECT box_office FROM etl_movie_data", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, None);
}

#[test]
fn ties_keep_table_order() {
    let catalog = TestCatalog::with_movies(&[
        movie("Small", Some(10.0)),
        movie("First", Some(50.0)),
        movie("Second", Some(50.0)),
        movie("Third", Some(50.0)),
    ]);
    let store = catalog.store();

    let rows = ReportAssembler::new(&store, "₹").preview(4);

    assert_eq!(titles(&rows), vec!["First", "Second", "Third", "Small"]);
}

#[test]
fn top_measure_is_grouped_for_display() {
    let catalog = TestCatalog::with_movies(&[
        movie("Small", Some(10.0)),
        movie("Big", Some(1_234_567.9)),
    ]);

    let report = catalog.service().build_summary_report();

    assert_eq!(report.total_records, 2);
    assert_eq!(report.top_measure, TopMeasure::Value(1_234_567.9));
    assert_eq!(report.top_measure_display, "₹1,234,567");
}

#[test]
fn genuine_zero_is_not_the_unavailable_sentinel() {
    let catalog = TestCatalog::with_movies(&[movie("Unknown", None)]);

    let report = catalog.service().build_summary_report();

    assert_eq!(report.top_measure, TopMeasure::Value(0.0));
    assert_eq!(report.top_measure_display, "₹0");
}

#[test]
fn summary_caps_preview_and_chart() {
    let movies: Vec<Movie> = [
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L",
    ]
    .iter()
    .enumerate()
    .map(|(i, t)| rated(*t, (i + 1) as f64 * 1000.0, i as f64))
    .collect();
    let catalog = TestCatalog::with_movies(&movies);

    let report = catalog.service().build_summary_report();

    assert_eq!(report.total_records, 12);
    assert_eq!(report.preview.len(), ReportLimits::SUMMARY.preview as usize);
    assert_eq!(report.preview[0].title, "L");
    assert_eq!(report.chart.len(), ReportLimits::SUMMARY.chart as usize);
    assert_eq!(report.chart.labels[0], "L");
}

#[test]
fn chart_averages_per_title_rounded_and_descending() {
    let catalog = TestCatalog::with_movies(&[
        rated("Heat", 1.0, 8.0),
        rated("Heat", 1.0, 9.0),
        rated("Ronin", 1.0, 7.123),
        rated("Drive", 1.0, 8.9),
    ]);

    let report = catalog.service().build_summary_report();

    assert_eq!(report.rating_column.as_deref(), Some("imdb_rating"));
    assert_eq!(report.chart.labels, vec!["Drive", "Heat", "Ronin"]);
    assert_eq!(report.chart.values, vec![Some(8.9), Some(8.5), Some(7.12)]);
}

#[test]
fn chart_uses_first_qualifying_column_only() {
    let catalog = TestCatalog::with_schema(
        "CREATE TABLE etl_movie_data (
            movie_id INTEGER PRIMARY KEY,
            title TEXT,
            box_office REAL,
            critic_score REAL,
            vote_average REAL
        );",
    );
    {
        let conn = catalog.connect();
        for (title, critic, vote) in [("Heat", 90.0, 1.0), ("Ronin", 60.0, 9.0)] {
            conn.execute(
                "INSERT INTO etl_movie_data (title, box_office, critic_score, vote_average)
                 VALUES (?1, 0, ?2, ?3)",
                params![title, critic, vote],
            )
            .unwrap();
        }
    }

    let report = catalog.service().build_summary_report();

    assert_eq!(report.rating_column.as_deref(), Some("critic_score"));
    assert_eq!(report.chart.labels, vec!["Heat", "Ronin"]);
    assert_eq!(report.chart.values, vec![Some(90.0), Some(60.0)]);
}

#[test]
fn chart_is_empty_without_a_rating_like_column() {
    let catalog = TestCatalog::with_schema(
        "CREATE TABLE etl_movie_data (
            movie_id INTEGER PRIMARY KEY,
            title TEXT,
            year INTEGER,
            imdb_id TEXT,
            box_office REAL,
            runtime_minutes INTEGER,
            director TEXT
        );
        INSERT INTO etl_movie_data (title, box_office) VALUES ('Heat', 10), ('Ronin', 20);",
    );

    let report = catalog.service().build_summary_report();

    assert_eq!(report.total_records, 2);
    assert_eq!(report.rating_column, None);
    assert!(report.chart.is_empty());
    assert_eq!(titles(&report.preview), vec!["Ronin", "Heat"]);
}

#[test]
fn missing_measure_column_only_degrades_the_ranked_fields() {
    let catalog = TestCatalog::with_schema(
        "CREATE TABLE etl_movie_data (movie_id INTEGER PRIMARY KEY, title TEXT, stars REAL);
         INSERT INTO etl_movie_data (title, stars) VALUES ('Heat', 4.5);",
    );

    let report = catalog.service().build_summary_report();

    assert_eq!(report.total_records, 1);
    assert_eq!(report.top_measure, TopMeasure::Unavailable);
    assert!(report.preview.is_empty());
    assert_eq!(report.chart.labels, vec!["Heat"]);
    assert_eq!(report.chart.values, vec![Some(4.5)]);
}

#[test]
fn full_preview_never_exceeds_its_limit() {
    let catalog = TestCatalog::empty();
    {
        let mut conn = catalog.connect();
        let tx = conn.transaction().unwrap();
        {
            let mut stmt = tx
                .prepare("INSERT INTO etl_movie_data (title, box_office) VALUES (?1, ?2)")
                .unwrap();
            for i in 0..10_000 {
                stmt.execute(params![format!("Movie {}", i), i as f64]).unwrap();
            }
        }
        tx.commit().unwrap();
    }

    let service = catalog.service();
    assert_eq!(service.record_count(), 10_000);

    match service.build_full_preview() {
        Preview::Rows(rows) => {
            assert_eq!(rows.len(), FULL_PREVIEW_LIMIT as usize);
            assert_eq!(rows[0].title, "Movie 9999");
            assert!(rows.windows(2).all(|w| w[0].box_office >= w[1].box_office));
        }
        Preview::Empty => panic!("expected rows"),
    }
}

#[test]
fn display_columns_of_unexpected_type_do_not_hide_the_ranking() {
    let catalog = TestCatalog::with_schema(
        "CREATE TABLE etl_movie_data (
            movie_id INTEGER,
            title TEXT,
            year REAL,
            imdb_id TEXT,
            box_office REAL,
            runtime_minutes REAL,
            director TEXT,
            imdb_rating REAL
        );
        INSERT INTO etl_movie_data VALUES
            (1, 'Heat', 1995.0, 'tt0113277', 187436818, 170.0, 'Michael Mann', 8.3),
            (NULL, 'Ronin', NULL, 122690, 41610884, NULL, NULL, 7.2);",
    );

    let report = catalog.service().build_summary_report();

    assert_eq!(report.total_records, 2);
    assert_eq!(report.top_measure, TopMeasure::Value(187_436_818.0));
    assert_eq!(report.top_measure_display, "₹187,436,818");
    assert_eq!(titles(&report.preview), vec!["Heat", "Ronin"]);
    assert_eq!(report.preview[0].year, Some(1995));
    assert_eq!(report.preview[0].movie_id, Some(1));
    assert_eq!(report.preview[1].movie_id, None);
    assert_eq!(report.preview[1].imdb_id.as_deref(), Some("122690"));
    assert_eq!(report.chart.len(), 2);
}

#[test]
fn top_measure_ignores_unreadable_display_cells() {
    let catalog = TestCatalog::with_schema(
        "CREATE TABLE etl_movie_data (movie_id, title, year, imdb_id, box_office, runtime_minutes, director);
         INSERT INTO etl_movie_data VALUES (NULL, NULL, 'nineteen ninety-five', X'00', 187436818, 'long', 42);",
    );

    let report = catalog.service().build_summary_report();

    assert_eq!(report.top_measure, TopMeasure::Value(187_436_818.0));
    assert_eq!(report.preview.len(), 1);
    let row = &report.preview[0];
    assert_eq!(row.movie_id, None);
    assert_eq!(row.title, "");
    assert_eq!(row.year, None);
    assert_eq!(row.runtime_minutes, None);
    assert_eq!(row.director.as_deref(), Some("42"));
}
