/// Remaining stack below which a fresh segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of every stack segment allocated when the red zone is reached.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first growing the native stack if less than [`RED_ZONE`] bytes
/// are left.
///
/// Parsing recurses once per nesting level of the source and evaluation once
/// per nested expression, statement and language level call, so deeply nested
/// or deeply recursive scripts become deep native recursion.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
