//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement creating the items table. Safe to run on every startup.
///
/// `id` is an alias of the rowid, so SQLite assigns `max(id) + 1` on insert.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS ix_items_name ON items(name);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (name, description)
VALUES (?1, ?2)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, description
FROM items
WHERE id = ?1
"#;

pub const SELECT_ITEMS_PAGE: &str = r#"
SELECT id, name, description
FROM items
ORDER BY id ASC
LIMIT ?1 OFFSET ?2
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, description = ?3
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";
