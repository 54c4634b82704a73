//! Sentinel values for the concurrency-version constraint of a document lookup.

/// Retrieve the document regardless of its version. The default.
pub const MATCH_ANY: i64 = -3;

/// "Match any" as understood by stores older than 1.2.0.
pub const MATCH_ANY_PRE_120: i64 = 0;

/// The document is known not to exist.
pub const NOT_FOUND: i64 = -1;

/// No version has been assigned yet.
pub const NOT_SET: i64 = -2;
