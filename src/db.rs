use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::error::ExtractionError;
use crate::quiz::questions::MaskMode;
use crate::quiz::Outcome;

pub fn connect(path: &Path) -> Result<Connection> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS quiz_runs (
            id            INTEGER PRIMARY KEY,
            digest        TEXT NOT NULL,
            document      TEXT NOT NULL,
            page_from     INTEGER NOT NULL,
            page_to       INTEGER NOT NULL,
            total_marks   INTEGER NOT NULL,
            mask_mode     TEXT NOT NULL,
            min_tokens    INTEGER NOT NULL,
            placeholder   TEXT NOT NULL,
            succeeded     BOOLEAN NOT NULL,
            question_count INTEGER NOT NULL,
            outcome       TEXT NOT NULL,
            created_at    TEXT NOT NULL,
            UNIQUE(digest, page_from, page_to, total_marks, mask_mode, min_tokens, placeholder)
        );
        CREATE INDEX IF NOT EXISTS idx_runs_created ON quiz_runs(created_at);
        ",
    )?;
    Ok(())
}

/// SHA-256 of the document bytes, hex encoded.
pub fn document_digest(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Everything that makes two runs interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunKey {
    pub digest: String,
    pub page_from: u32,
    pub page_to: u32,
    pub total_marks: u32,
    pub mask_mode: MaskMode,
    pub min_tokens: usize,
    pub placeholder: String,
}

pub fn lookup_outcome(conn: &Connection, key: &RunKey) -> Result<Option<Outcome>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT outcome FROM quiz_runs
             WHERE digest = ?1 AND page_from = ?2 AND page_to = ?3
               AND total_marks = ?4 AND mask_mode = ?5
               AND min_tokens = ?6 AND placeholder = ?7",
            rusqlite::params![
                key.digest,
                key.page_from,
                key.page_to,
                key.total_marks,
                key.mask_mode.as_str(),
                key.min_tokens as i64,
                key.placeholder,
            ],
            |row| row.get(0),
        )
        .optional()?;

    match json {
        Some(j) => Ok(Some(
            serde_json::from_str(&j).context("Corrupt cached outcome")?,
        )),
        None => Ok(None),
    }
}

pub fn save_outcome(conn: &Connection, key: &RunKey, document: &str, outcome: &Outcome) -> Result<()> {
    let question_count = match outcome {
        Outcome::Succeeded { questions, .. } => questions.len(),
        Outcome::Failed { .. } => 0,
    };
    conn.execute(
        "INSERT OR REPLACE INTO quiz_runs
         (digest, document, page_from, page_to, total_marks, mask_mode,
          min_tokens, placeholder, succeeded, question_count, outcome, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        rusqlite::params![
            key.digest,
            document,
            key.page_from,
            key.page_to,
            key.total_marks,
            key.mask_mode.as_str(),
            key.min_tokens as i64,
            key.placeholder,
            outcome.is_success(),
            question_count as i64,
            serde_json::to_string(outcome)?,
            chrono::Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

// ── History ──

pub struct HistoryRow {
    pub document: String,
    pub page_from: u32,
    pub page_to: u32,
    pub total_marks: u32,
    pub succeeded: bool,
    pub question_count: i64,
    pub created_at: String,
}

pub fn fetch_history(conn: &Connection, limit: usize) -> Result<Vec<HistoryRow>> {
    let mut stmt = conn.prepare(
        "SELECT document, page_from, page_to, total_marks, succeeded, question_count, created_at
         FROM quiz_runs
         ORDER BY created_at DESC, id DESC
         LIMIT ?1",
    )?;
    let rows = stmt
        .query_map([limit as i64], |row| {
            Ok(HistoryRow {
                document: row.get(0)?,
                page_from: row.get(1)?,
                page_to: row.get(2)?,
                total_marks: row.get(3)?,
                succeeded: row.get(4)?,
                question_count: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn clear_outcomes(conn: &Connection) -> Result<usize> {
    Ok(conn.execute("DELETE FROM quiz_runs", [])?)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::marks::MarkedQuestion;

    fn open_temp() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = connect(&dir.path().join("nested/quiz.sqlite")).unwrap();
        init_schema(&conn).unwrap();
        (dir, conn)
    }

    fn key(marks: u32) -> RunKey {
        RunKey {
            digest: "abc123".into(),
            page_from: 1,
            page_to: 3,
            total_marks: marks,
            mask_mode: MaskMode::Token,
            min_tokens: 10,
            placeholder: "______".into(),
        }
    }

    fn success() -> Outcome {
        Outcome::Succeeded {
            questions: vec![MarkedQuestion {
                number: 1,
                text: "The ______ sat.".into(),
                marks: 10,
                answer: "cat".into(),
            }],
            total_marks: 10,
        }
    }

    #[test]
    fn round_trip() {
        let (_dir, conn) = open_temp();
        assert!(lookup_outcome(&conn, &key(10)).unwrap().is_none());
        save_outcome(&conn, &key(10), "notes.pdf", &success()).unwrap();
        assert_eq!(lookup_outcome(&conn, &key(10)).unwrap(), Some(success()));
        // different marks is a different run
        assert!(lookup_outcome(&conn, &key(11)).unwrap().is_none());
    }

    #[test]
    fn mask_mode_is_part_of_the_key() {
        let (_dir, conn) = open_temp();
        save_outcome(&conn, &key(10), "notes.pdf", &success()).unwrap();
        let other = RunKey {
            mask_mode: MaskMode::FirstMatch,
            ..key(10)
        };
        assert!(lookup_outcome(&conn, &other).unwrap().is_none());
    }

    #[test]
    fn sentence_settings_are_part_of_the_key() {
        let (_dir, conn) = open_temp();
        save_outcome(&conn, &key(10), "notes.pdf", &success()).unwrap();
        let stricter = RunKey {
            min_tokens: 50,
            ..key(10)
        };
        let other_blank = RunKey {
            placeholder: "[___]".into(),
            ..key(10)
        };
        assert!(lookup_outcome(&conn, &stricter).unwrap().is_none());
        assert!(lookup_outcome(&conn, &other_blank).unwrap().is_none());
        assert_eq!(lookup_outcome(&conn, &key(10)).unwrap(), Some(success()));
    }

    #[test]
    fn save_replaces_existing() {
        let (_dir, conn) = open_temp();
        save_outcome(&conn, &key(10), "notes.pdf", &success()).unwrap();
        let failed = Outcome::Failed {
            message: "boom".into(),
        };
        save_outcome(&conn, &key(10), "notes.pdf", &failed).unwrap();
        assert_eq!(lookup_outcome(&conn, &key(10)).unwrap(), Some(failed));
        assert_eq!(fetch_history(&conn, 10).unwrap().len(), 1);
    }

    #[test]
    fn history_and_clear() {
        let (_dir, conn) = open_temp();
        save_outcome(&conn, &key(10), "a.pdf", &success()).unwrap();
        save_outcome(&conn, &key(20), "b.pdf", &Outcome::Failed { message: "x".into() }).unwrap();

        let rows = fetch_history(&conn, 10).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].document, "b.pdf");
        assert!(!rows[0].succeeded);
        assert_eq!(rows[1].question_count, 1);
        assert_eq!(fetch_history(&conn, 1).unwrap().len(), 1);

        assert_eq!(clear_outcomes(&conn).unwrap(), 2);
        assert!(fetch_history(&conn, 10).unwrap().is_empty());
    }

    #[test]
    fn digest_of_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = document_digest(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }

    #[test]
    fn digest_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, b"hello").unwrap();
        assert_eq!(
            document_digest(&path).unwrap(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
