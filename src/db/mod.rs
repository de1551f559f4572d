// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Data access layer.
//!
//! This module handles all interactions with the SQLite video catalog,
//! including schema creation, paged searches and author suggestions. It uses
//! cached statements to optimize frequently executed queries.
//!
//! # Tables
//!
//! * `videos` - Individual video files with their title, author and path.
//!
//! # Performance
//!
//! Most functions in this module use [`rusqlite::Connection::prepare_cached`]
//! to reduce SQL parsing overhead.

mod model;
pub(crate) mod scan;

use anyhow::{Context, Result};
use rusqlite::{Connection, params, params_from_iter, types::Value};

use crate::{
    model::{SearchParams, Video},
    source::SourceError,
};

/// Opens a connection to the SQLite database and configures performance
/// settings.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so the catalog can be searched
///   while a scan is writing to it.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL` and increases
///   the cache size.
/// * **Schema**: Executes [`create_schema`] to ensure all tables and indices
///   exist.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened, if the initial
/// PRAGMA configuration fails, or if the schema initialization fails.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open {path}"))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -16000; -- Use 16MB of RAM for cache
    ",
    )?;

    conn.set_prepared_statement_cache_capacity(32);

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// Titles and authors compare case-insensitively, and a file can only be
/// catalogued once.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS videos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            durable_id INTEGER NOT NULL UNIQUE,
            title TEXT NOT NULL COLLATE NOCASE,
            author TEXT NOT NULL COLLATE NOCASE,
            author_uri TEXT,
            duration INTEGER NOT NULL,
            filename TEXT NOT NULL UNIQUE
        );

        CREATE INDEX IF NOT EXISTS idx_videos_author ON videos (author);

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Adds a video to the catalog, replacing any earlier entry for the same
/// file.
pub(crate) fn insert_video(conn: &Connection, video: &Video) -> rusqlite::Result<()> {
    let sql = "
        INSERT OR REPLACE INTO videos (durable_id, title, author, author_uri, duration, filename)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![
        video.id,
        video.title,
        video.author,
        video.author_uri,
        video.duration,
        video.filename
    ])?;

    Ok(())
}

pub(crate) fn count_videos(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM videos", [], |row| row.get(0))
}

/// Makes `%`, `_` and `\` in user input match themselves in a `LIKE`
/// pattern that uses `ESCAPE '\\'`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the `WHERE` clause and its parameters for a search.
///
/// Every keyword must appear in either the title or the author, a channel
/// search matches the author exactly. Empty parameters match everything.
fn search_filter(search: &SearchParams) -> (String, Vec<Value>) {
    let mut filters = Vec::new();
    let mut params = Vec::new();

    for keyword in search.keywords.split_whitespace() {
        filters.push("(title LIKE ? ESCAPE '\\' OR author LIKE ? ESCAPE '\\')");
        let param = format!("%{}%", escape_like(keyword));
        params.push(Value::Text(param.clone()));
        params.push(Value::Text(param));
    }

    if !search.author.is_empty() {
        filters.push("(author = ?)");
        params.push(Value::Text(search.author.clone()));
    }

    let clause = if filters.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", filters.join(" AND "))
    };

    (clause, params)
}

/// Fetches one page of the videos matching `search`, ordered by author and
/// title.
///
/// # Errors
///
/// Returns [`SourceError::Query`] if the SQL query fails or a row cannot be
/// mapped to a [`Video`].
pub(crate) fn search_videos(
    conn: &Connection,
    search: &SearchParams,
    limit: usize,
    offset: usize,
) -> Result<Vec<Video>, SourceError> {
    let (clause, mut params) = search_filter(search);

    let sql = format!(
        "SELECT durable_id, title, author, author_uri, duration, filename
         FROM videos{clause}
         ORDER BY author, title, filename
         LIMIT ? OFFSET ?"
    );

    params.push(Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));
    params.push(Value::Integer(i64::try_from(offset).unwrap_or(i64::MAX)));

    let mut stmt = conn.prepare_cached(&sql)?;
    let results = stmt
        .query_map(params_from_iter(params), Video::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

/// Fetches the authors that appear most often among the videos matching the
/// keywords of `search`, excluding the author being searched for.
pub(crate) fn related_authors(
    conn: &Connection,
    search: &SearchParams,
    limit: usize,
) -> Result<Vec<String>, SourceError> {
    let keywords_only = SearchParams {
        author: String::new(),
        ..search.clone()
    };
    let (clause, mut params) = search_filter(&keywords_only);

    let exclude = if clause.is_empty() {
        " WHERE author <> ?"
    } else {
        " AND author <> ?"
    };
    params.push(Value::Text(search.author.clone()));
    params.push(Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));

    let sql = format!(
        "SELECT author, COUNT(*) AS videos
         FROM videos{clause}{exclude}
         GROUP BY author
         ORDER BY videos DESC, author
         LIMIT ?"
    );

    let mut stmt = conn.prepare_cached(&sql)?;
    let results = stmt
        .query_map(params_from_iter(params), |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::model::VideoId;

    fn catalog(videos: &[(&str, &str)]) -> (TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let conn = init_db(path.to_str().unwrap()).unwrap();
        for (title, author) in videos {
            let video = Video::new(
                format!("/videos/{author}/{title}.mp4"),
                title.to_string(),
                author.to_string(),
            );
            insert_video(&conn, &video).unwrap();
        }
        (dir, conn)
    }

    fn titles(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.title.as_str()).collect()
    }

    #[test]
    fn test_empty_search_lists_everything_in_pages() {
        let (_dir, conn) = catalog(&[
            ("Cats", "Alice"),
            ("Dogs", "Alice"),
            ("Birds", "Bob"),
        ]);

        let all = SearchParams::default();
        let first = search_videos(&conn, &all, 2, 0).unwrap();
        let second = search_videos(&conn, &all, 2, 2).unwrap();

        assert_eq!(titles(&first), vec!["Cats", "Dogs"]);
        assert_eq!(titles(&second), vec!["Birds"]);
        assert!(search_videos(&conn, &all, 2, 4).unwrap().is_empty());
    }

    #[test]
    fn test_keywords_match_title_or_author() {
        let (_dir, conn) = catalog(&[
            ("Funny cats", "Alice"),
            ("Dogs", "Catherine"),
            ("Birds", "Bob"),
        ]);

        let found = search_videos(&conn, &SearchParams::for_keywords("CAT".into()), 10, 0).unwrap();

        assert_eq!(titles(&found), vec!["Funny cats", "Dogs"]);
    }

    #[test]
    fn test_every_keyword_must_match() {
        let (_dir, conn) = catalog(&[("Funny cats", "Alice"), ("Funny dogs", "Alice")]);

        let found = search_videos(&conn, &SearchParams::for_keywords("funny dogs".into()), 10, 0)
            .unwrap();

        assert_eq!(titles(&found), vec!["Funny dogs"]);
    }

    #[test]
    fn test_wildcards_in_keywords_match_literally() {
        let (_dir, conn) = catalog(&[
            ("100% cats", "Alice"),
            ("1000 dogs", "Alice"),
            ("a_b", "Bob"),
            ("axb", "Bob"),
        ]);

        let found = search_videos(&conn, &SearchParams::for_keywords("100%".into()), 10, 0).unwrap();
        assert_eq!(titles(&found), vec!["100% cats"]);

        let found = search_videos(&conn, &SearchParams::for_keywords("a_b".into()), 10, 0).unwrap();
        assert_eq!(titles(&found), vec!["a_b"]);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("cats"), "cats");
        assert_eq!(escape_like(r"50%_off\"), r"50\%\_off\\");
    }

    #[test]
    fn test_channel_search_matches_author() {
        let (_dir, conn) = catalog(&[("Cats", "Alice"), ("Dogs", "Alicia")]);

        let found = search_videos(&conn, &SearchParams::for_channel("alice".into()), 10, 0).unwrap();

        assert_eq!(titles(&found), vec!["Cats"]);
        assert_eq!(found[0].id, VideoId::for_path("/videos/Alice/Cats.mp4"));
    }

    #[test]
    fn test_rescan_replaces_entry() {
        let (_dir, conn) = catalog(&[("Cats", "Alice")]);
        let mut video = Video::new("/videos/Alice/Cats.mp4".into(), "Cats v2".into(), "Alice".into());
        video.duration = 61;

        insert_video(&conn, &video).unwrap();

        assert_eq!(count_videos(&conn).unwrap(), 1);
        let found = search_videos(&conn, &SearchParams::default(), 10, 0).unwrap();
        assert_eq!(found[0].title, "Cats v2");
        assert_eq!(found[0].duration, 61);
    }

    #[test]
    fn test_related_authors_by_video_count() {
        let (_dir, conn) = catalog(&[
            ("Cats 1", "Alice"),
            ("Cats 2", "Bob"),
            ("Cats 3", "Bob"),
            ("Cats 4", "Carol"),
            ("Dogs", "Dave"),
        ]);

        let search = SearchParams {
            keywords: "cats".into(),
            author: "Carol".into(),
            transient: false,
        };
        let related = related_authors(&conn, &search, 5).unwrap();

        assert_eq!(related, vec!["Bob".to_string(), "Alice".to_string()]);
    }
}
