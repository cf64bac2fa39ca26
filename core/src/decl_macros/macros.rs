// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `return Ok(())` repeatedly.
///
/// ```
/// use stutter_core::{CommonResult, throws};
///
/// fn do_something() -> CommonResult<()> {
///     throws!({
///         let _it = 12;
///     });
/// }
///
/// assert!(do_something().is_ok());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Syntactic sugar for `Ok(())` or `Ok($value)`.
///
/// ```
/// use stutter_core::{CommonResult, ok};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<u8> { ok!(42) }
///
/// assert_eq!(value().unwrap(), 42);
/// assert!(unit().is_ok());
/// ```
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
