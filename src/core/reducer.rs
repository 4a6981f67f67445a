//! Reducer functions computing the next state from an action.
//!
//! A reducer is the only place where state transitions are defined. It must
//! be pure: the same state and action always produce the same next state,
//! with no side effects.

use std::convert::Infallible;

type ReduceFn<S, A, E> = Box<dyn Fn(&S, &A) -> Result<S, E> + Send + Sync>;

/// Pure transition function `(state, action) -> state`.
///
/// Reducers are infallible by default (`E = Infallible`). A fallible reducer
/// may reject an action by returning an error; the store then leaves its
/// state untouched.
///
/// Purity is a caller obligation. The store relies on it for the guarantee
/// that its state equals the left fold of the reducer over every dispatched
/// action.
///
/// # Example
///
/// ```rust
/// use reducto::core::Reducer;
///
/// enum Op {
///     Add(i64),
///     Reset,
/// }
///
/// let reducer = Reducer::new(|state: &i64, op: &Op| match op {
///     Op::Add(n) => state + n,
///     Op::Reset => 0,
/// });
///
/// assert_eq!(reducer.reduce(&1, &Op::Add(2)), Ok(3));
/// assert_eq!(reducer.fold(0, &[Op::Add(5), Op::Reset, Op::Add(1)]), Ok(1));
/// ```
pub struct Reducer<S, A, E = Infallible> {
    reduce: ReduceFn<S, A, E>,
}

impl<S, A> Reducer<S, A, Infallible> {
    /// Create a reducer from an infallible pure function.
    ///
    /// Variants the function does not handle should return a clone of the
    /// incoming state.
    pub fn new<F>(reduce: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Reducer {
            reduce: Box::new(move |state: &S, action: &A| Ok(reduce(state, action))),
        }
    }
}

impl<S, A, E> Reducer<S, A, E> {
    /// Create a reducer that may reject an action.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reducto::core::Reducer;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Overflow;
    ///
    /// let reducer = Reducer::fallible(|state: &u8, by: &u8| {
    ///     state.checked_add(*by).ok_or(Overflow)
    /// });
    ///
    /// assert_eq!(reducer.reduce(&250, &5), Ok(255));
    /// assert_eq!(reducer.reduce(&250, &6), Err(Overflow));
    /// ```
    pub fn fallible<F>(reduce: F) -> Self
    where
        F: Fn(&S, &A) -> Result<S, E> + Send + Sync + 'static,
    {
        Reducer {
            reduce: Box::new(reduce),
        }
    }

    /// Compute the next state for `action` applied to `state`.
    pub fn reduce(&self, state: &S, action: &A) -> Result<S, E> {
        (self.reduce)(state, action)
    }

    /// Left fold of the reducer over a sequence of actions.
    ///
    /// Stops at the first rejected action and returns its error.
    pub fn fold<'a, I>(&self, initial: S, actions: I) -> Result<S, E>
    where
        I: IntoIterator<Item = &'a A>,
        A: 'a,
    {
        actions
            .into_iter()
            .try_fold(initial, |state, action| self.reduce(&state, action))
    }
}
