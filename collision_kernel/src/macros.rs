/// Assert two values are fuzzy equal, for anything with `fuzzy_eq`/`fuzzy_eq_eps` methods
/// (scalars and vectors). The optional third argument overrides the epsilon.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            left.fuzzy_eq(*right),
            "assertion failed: `left.fuzzy_eq(right)`\n  left: `{:?}`\n right: `{:?}`",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right, eps) = (&$left, &$right, &$eps);
        assert!(
            left.fuzzy_eq_eps(*right, *eps),
            "assertion failed: `left.fuzzy_eq_eps(right, eps)`\n  left: `{:?}`\n right: `{:?}`\n   eps: `{:?}`",
            left,
            right,
            eps
        );
    }};
}
