use tracing::debug;

/// Folds `collection` into a single value.
///
/// `callback` runs exactly once per element, in iteration order, and each
/// result becomes the accumulator for the next call. An empty collection
/// yields `initial` untouched. A panic inside `callback` is not caught.
pub fn reduce<I, A, F>(collection: I, mut callback: F, initial: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let mut result = initial;
    let mut applied = 0usize;

    for item in collection {
        result = callback(result, item);
        applied += 1;
    }

    debug!("reduce: applied callback to {} elements", applied);
    result
}
