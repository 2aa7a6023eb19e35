/// Marker trait for store state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a view needs)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable across tasks (published through a watch channel)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
