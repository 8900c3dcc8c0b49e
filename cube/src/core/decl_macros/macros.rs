// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro. Only usable where
/// `pretty_assertions` is a dependency (tests).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Syntactic sugar for `Ok(())` and `Ok($value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
