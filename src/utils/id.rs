use ulid::Ulid;

/// Supplies a fresh identifier for a newly created resource.
pub fn next_id() -> String {
    Ulid::new().to_string()
}
