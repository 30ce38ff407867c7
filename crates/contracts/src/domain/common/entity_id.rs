/// Trait for typed entity identifiers.
///
/// The backend uses numeric identity columns, so every id newtype wraps an
/// `i64` and round-trips through its decimal string form for URLs.
pub trait EntityId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
