/// All observation timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// League points. Cutoffs are whole LP values.
pub type Lp = i64;
