//! The `pipe!` macro for left-to-right function composition.

/// Composes unary functions from left to right into one function.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`: functions run in the order they are
/// written, each exactly once per call. It is the data-flow reading of
/// [`compose!`](crate::compose!): `pipe!(f, g, h) == compose!(h, g, f)`.
///
/// # Syntax
///
/// - `pipe!()` - The identity function
/// - `pipe!(f)` - `f` unchanged
/// - `pipe!(f, g)` - `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Any number of functions
///
/// # Examples
///
/// ```
/// use lazy_seq::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = 11
/// let piped = pipe!(double, add_one);
/// assert_eq!(piped(5), 11);
///
/// assert_eq!(pipe!()(5), 5);
/// ```
///
/// Types flow through the chain:
///
/// ```
/// use lazy_seq::pipe;
///
/// let shout = pipe!(
///     |text: &str| text.trim().to_string(),
///     |text: String| text.to_uppercase(),
///     |text: String| text + "!",
/// );
/// assert_eq!(shout("  hi "), "HI!");
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // pipe!(f, g, h, ...) = pipe!(f, pipe!(g, h, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_piped = $crate::pipe!($($remaining_functions),+);
        move |input| remaining_piped(first(input))
    }};
}
