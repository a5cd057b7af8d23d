/// Row identifier of a persisted entity.
///
/// All entities live in SQLite tables with an auto-incremented
/// integer primary key that is also exposed through the API.
pub type Id = i64;
