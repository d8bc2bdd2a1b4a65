//! The `compose!` macro for right-to-left function composition.

/// Composes unary functions from right to left into one function.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function is applied
/// first, each function exactly once per call.
///
/// # Syntax
///
/// - `compose!()` - The identity function
/// - `compose!(f)` - `f` unchanged
/// - `compose!(f, g)` - `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Any number of functions
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```
/// use lazy_seq::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
///
/// assert_eq!(compose!()(5), 5);
/// ```
///
/// Types flow through the chain:
///
/// ```
/// use lazy_seq::compose;
///
/// let length_of_square = compose!(|text: String| text.len(), |x: i32| (x * x).to_string());
/// assert_eq!(length_of_square(12), 3);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
