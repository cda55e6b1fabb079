//! Literal syntax for operators and sequences.

// =============================================================================
// operator! - Declare an operator constant
// =============================================================================

/// Declare an operator from its name and parameter notation.
///
/// The name is taken verbatim; the notation is the one `signature!` parses.
///
/// # Example
///
/// ```ignore
/// const MOLD: Operator = operator!(Mold: type..);
/// const ROAD: Operator = operator!(Road: op(type..)..);
/// const PAIR: Operator = operator!(Pair: type, type);   // Unclassified
/// ```
#[macro_export]
macro_rules! operator {
    ($name:ident : $($signature:tt)*) => {
        $crate::Operator::new(::core::stringify!($name), $crate::signature!($($signature)*))
    };
}

// =============================================================================
// seq! - Sequence literal
// =============================================================================

/// Build a sequence from a list of elements.
///
/// - `seq![]` is the empty generic sequence.
/// - `seq![Tag => a, b, ...]` is a native sequence of kind `Tag`, and
///   returns a `Result` since the elements may not fit.
/// - `seq![a, b, ...]` infers: native when every element shares one kind.
///
/// # Example
///
/// ```ignore
/// let values = seq![1, 2, 3];                  // Value1
/// let types = seq![Ty::from("u8"), Ty::from("u16")];  // Type1
/// let mixed = seq![1, 'a', MOLD];              // generic
/// let checked = seq![Value1 => 1, 2]?;
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::generic(::core::iter::empty())
    };
    ($tag:ident => $($element:expr),* $(,)?) => {
        $crate::Sequence::native($crate::KindTag::$tag, [$($crate::Element::from($element)),*])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::infer([$($crate::Element::from($element)),+])
    };
}

// =============================================================================
// assert_kind! - Compile-time classification check
// =============================================================================

/// Fail compilation unless a const subject classifies as expected.
///
/// # Example
///
/// ```ignore
/// assert_kind!(MOLD => Type1);
/// assert_kind!(signature!(op(value..)..) => Value2);
/// assert_kind!(PAIR => Unclassified);
/// ```
#[macro_export]
macro_rules! assert_kind {
    ($subject:expr => Unclassified) => {
        const _: () = ::core::assert!(
            ($subject).classify().is_unclassified(),
            ::core::concat!(::core::stringify!($subject), " is classified")
        );
    };
    ($subject:expr => $tag:ident) => {
        const _: () = ::core::assert!(
            ($subject).classify().is($crate::KindTag::$tag),
            ::core::concat!(::core::stringify!($subject), " does not classify as ", ::core::stringify!($tag))
        );
    };
}
