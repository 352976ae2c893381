use crate::db::Database;
use crate::error::Result;
use crate::models::{Language, QueryRecord, QueryType};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tracing::warn;

// Query Log

impl Database {
    pub fn insert_query_record(&self, record: &QueryRecord) -> Result<()> {
        let request = serde_json::to_string(&record.request)?;
        let response = serde_json::to_string(&record.response)?;

        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO query_log
                    (id, query_type, language, request_data, response_data, user_location, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    record.id,
                    record.query_type.as_str(),
                    record.language.as_str(),
                    request,
                    response,
                    record.user_location,
                    record.created_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }

    /// Most recent records first.
    pub fn recent_query_records(&self, limit: usize) -> Result<Vec<QueryRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT * FROM query_log ORDER BY created_at DESC, rowid DESC LIMIT ?1",
            )?;
            let records: Vec<QueryRecord> = stmt
                .query_map([limit as i64], row_to_query_record)?
                .filter_map(|r| r.ok())
                .flatten()
                .collect();
            Ok(records)
        })
    }

    pub fn count_queries_by_type(&self) -> Result<Vec<(QueryType, i64)>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT query_type, COUNT(*) FROM query_log GROUP BY query_type ORDER BY query_type",
            )?;
            let counts: Vec<(QueryType, i64)> = stmt
                .query_map([], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
                })?
                .filter_map(|r| r.ok())
                .filter_map(|(t, n)| QueryType::from_str(&t).map(|t| (t, n)))
                .collect();
            Ok(counts)
        })
    }
}

/// Rows with an unknown query type are skipped rather than failing the read.
fn row_to_query_record(row: &Row) -> rusqlite::Result<Option<QueryRecord>> {
    let id: String = row.get("id")?;
    let type_str: String = row.get("query_type")?;
    let language_str: String = row.get("language")?;
    let request_str: String = row.get("request_data")?;
    let response_str: Option<String> = row.get("response_data")?;
    let created_at_str: String = row.get("created_at")?;

    let Some(query_type) = QueryType::from_str(&type_str) else {
        warn!(id = %id, query_type = %type_str, "Unknown query_type in query log, skipping");
        return Ok(None);
    };

    let language = Language::from_str(&language_str).unwrap_or_else(|| {
        warn!(language = %language_str, "Unknown language in query log, defaulting to en");
        Language::En
    });

    let parse_json = |s: &str| serde_json::from_str(s).unwrap_or(serde_json::Value::Null);

    Ok(Some(QueryRecord {
        id,
        query_type,
        language,
        request: parse_json(&request_str),
        response: response_str
            .as_deref()
            .map(parse_json)
            .unwrap_or(serde_json::Value::Null),
        user_location: row.get("user_location")?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    }))
}
