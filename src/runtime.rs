//! Pluggable fork-join backends for the recursive executor.
//!
//! Replaces the source's preprocessor zoo (`dispatch.h`'s `SEQUENTIAL`,
//! `_OPENMP`, `CILK`, `CXX_ASYNC`, `INSIEME_RT`) with a single trait and
//! three implementations chosen at runtime instead of compile time.
//!
//! Every spawn point in [`crate::executor`] is a two-way fork-join: run
//! one sibling on a helper thread, the other inline, then wait for both —
//! exactly [`ParallelRuntime::join`]'s contract. There's no standing
//! "scope" object threaded through the recursion because the algorithm
//! never needs more than two concurrent siblings at a time.

/// A backend capable of running two closures to completion, with no
/// guarantee about which runs first or on which thread.
///
/// Implementations must not assume anything about `a`/`b` beyond `Send`:
/// the caller (the recursive executor) is responsible for only joining
/// siblings whose footprints don't overlap at any time step they share,
/// per the decomposition's own disjointness argument (spec section 5).
pub trait ParallelRuntime: Sync {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}

/// Runs both closures inline, `a` then `b`. The degenerate, always-legal
/// backend (spec section 4.5: sequential execution is a valid schedule).
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl ParallelRuntime for Sequential {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let ra = a();
        let rb = b();
        (ra, rb)
    }
}

/// Runs `a` on a scoped OS thread while `b` runs on the caller, via
/// `std::thread::scope`. No thread pool: a fresh thread per join.
#[derive(Debug, Default, Clone, Copy)]
pub struct Threaded;

impl ParallelRuntime for Threaded {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        std::thread::scope(|scope| {
            let handle = scope.spawn(a);
            let rb = b();
            let ra = handle.join().expect("spawned side of join panicked");
            (ra, rb)
        })
    }
}

/// Runs both closures on rayon's work-stealing pool via `rayon::join`.
/// The default backend (`config::RuntimeMode::WorkStealing`): amortizes
/// thread setup across the whole recursion instead of paying it per
/// join like [`Threaded`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RayonRuntime;

impl ParallelRuntime for RayonRuntime {
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(runtime: impl ParallelRuntime) {
        let (a, b) = runtime.join(|| 1 + 1, || "two".to_string());
        assert_eq!(a, 2);
        assert_eq!(b, "two");
    }

    #[test]
    fn sequential_runs_both_sides() {
        exercise(Sequential);
    }

    #[test]
    fn threaded_runs_both_sides() {
        exercise(Threaded);
    }

    #[test]
    fn rayon_runs_both_sides() {
        exercise(RayonRuntime);
    }
}
