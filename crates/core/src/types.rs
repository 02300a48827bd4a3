/// Item and claim ids are positive integers from a monotonic per-collection
/// counter; once issued an id is never reused, even after deletion.
pub type EntityId = i64;
