//! Picking the first desired value a device supports.

use std::fmt::Debug;

/// Returns the first of `desired` that appears in `supported`.
///
/// `None` if the device reported no list, or if nothing matches.
pub fn find_settable_value<T>(supported: Option<&[T]>, desired: &[T]) -> Option<T>
where
    T: Copy + PartialEq + Debug,
{
    tracing::debug!("Supported values: {:?}", supported);
    let result = supported.and_then(|values| {
        desired
            .iter()
            .copied()
            .find(|candidate| values.contains(candidate))
    });
    tracing::debug!("Settable value: {:?}", result);
    result
}
