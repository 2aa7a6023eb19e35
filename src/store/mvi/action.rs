/// Marker trait for action objects.
///
/// Actions represent:
/// - A fetch starting, succeeding or failing
/// - User preference changes (filters, selection)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {}
