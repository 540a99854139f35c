/// Primary-key type shared by every table (BIGSERIAL columns).
pub type DbId = i64;

/// UTC timestamp, the in-memory form of every TIMESTAMPTZ column.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
