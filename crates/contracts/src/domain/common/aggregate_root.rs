/// Trait for aggregate roots
///
/// Static metadata the UI uses for titles and the HTTP layer uses for
/// building resource paths.
pub trait AggregateRoot {
    /// Remote collection name, used as the REST resource segment
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;
}
