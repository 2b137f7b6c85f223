use crate::errors::AppResult;
use crate::models::item::{Item, NewItem};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params};

/// Format used by rows written before timestamps were stored as RFC 3339.
const LEGACY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Insert one item and return it with its assigned id.
pub fn insert_item(conn: &Connection, item: &NewItem) -> AppResult<Item> {
    conn.execute(
        "INSERT INTO items (name, quantity, description, date_added)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            item.name,
            item.quantity,
            item.description,
            item.date_added.to_rfc3339(),
        ],
    )?;

    Ok(Item {
        id: conn.last_insert_rowid(),
        name: item.name.clone(),
        quantity: item.quantity,
        description: item.description.clone(),
        date_added: Some(item.date_added),
    })
}

/// Load every stored item. No ordering is applied.
pub fn load_items(conn: &Connection) -> AppResult<Vec<Item>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, quantity, description, date_added FROM items")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_item(conn: &Connection, id: i64) -> AppResult<Option<Item>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, quantity, description, date_added FROM items WHERE id = ?1",
    )?;
    let mut rows = stmt.query_map([id], map_row)?;
    Ok(rows.next().transpose()?)
}

pub fn count_items(conn: &Connection) -> AppResult<i64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
    Ok(n)
}

pub fn map_row(row: &Row) -> Result<Item> {
    // date_added is nullable, like the other payload columns
    let date_added = match row.get::<_, Option<String>>("date_added")? {
        Some(raw) => Some(parse_date_added(&raw).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("invalid date_added value: {}", raw).into(),
            )
        })?),
        None => None,
    };

    Ok(Item {
        id: row.get("id")?,
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        quantity: row.get::<_, Option<i64>>("quantity")?.unwrap_or(0),
        description: row
            .get::<_, Option<String>>("description")?
            .unwrap_or_default(),
        date_added,
    })
}

fn parse_date_added(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(raw, LEGACY_DATETIME_FORMAT).ok()?;
    // A wall-clock time skipped by a DST jump has no local instant; read it as UTC.
    Some(
        Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    )
}
