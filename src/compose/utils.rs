//! Function-valued helpers behind the composition macros.
//!
//! - [`identity`]: the unit of composition, returned by `compose!()` and `pipe!()`
//! - [`compose_all`] / [`pipe_all`]: composition of a list of functions whose
//!   length is only known at runtime

/// Returns the value unchanged.
///
/// `compose!(identity, f)` and `compose!(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use lazy_seq::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A boxed unary function from `T` to `T`.
pub type Endomorphism<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Composes `functions` right to left.
///
/// The last function in the list runs first. An empty list composes to the
/// identity.
///
/// # Examples
///
/// ```
/// use lazy_seq::compose::{Endomorphism, compose_all};
///
/// let mut steps: Vec<Endomorphism<i32>> = Vec::new();
/// steps.push(Box::new(|x| x + 1));
/// steps.push(Box::new(|x| x * 10));
/// let composed = compose_all(steps);
/// assert_eq!(composed(2), 21);
///
/// assert_eq!(compose_all(Vec::<Endomorphism<i32>>::new())(2), 2);
/// ```
pub fn compose_all<'a, T>(functions: Vec<Endomorphism<'a, T>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    move |input| {
        functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }
}

/// Composes `functions` left to right.
///
/// The first function in the list runs first. An empty list composes to the
/// identity.
///
/// # Examples
///
/// ```
/// use lazy_seq::compose::{Endomorphism, pipe_all};
///
/// let mut steps: Vec<Endomorphism<i32>> = Vec::new();
/// steps.push(Box::new(|x| x + 1));
/// steps.push(Box::new(|x| x * 10));
/// let piped = pipe_all(steps);
/// assert_eq!(piped(2), 30);
/// ```
pub fn pipe_all<'a, T>(functions: Vec<Endomorphism<'a, T>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    move |input| {
        functions
            .iter()
            .fold(input, |value, function| function(value))
    }
}
