//! SQLite row conversion functions.

use items_core::item::ItemRecord;
use rusqlite::Row;

/// Convert a SQLite row to an ItemRecord.
///
/// Expected columns: id, name, description
pub fn row_to_record(row: &Row) -> rusqlite::Result<ItemRecord> {
    Ok(ItemRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_record() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();

        let record = conn
            .query_row("SELECT 4, 'Pen', 'Blue ink'", [], row_to_record)
            .unwrap();

        assert_eq!(
            record,
            ItemRecord {
                id: 4,
                name: "Pen".to_string(),
                description: "Blue ink".to_string(),
            }
        );
    }

    #[test]
    fn test_row_to_record_rejects_null_name() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();

        let result = conn.query_row("SELECT 1, NULL, 'x'", [], row_to_record);

        assert!(matches!(
            result,
            Err(rusqlite::Error::InvalidColumnType(1, _, _))
        ));
    }
}
