//! Internal helper macros shared by the header and flow-control modules.

/// Returns `Err($error)` from the enclosing function unless `$predicate` holds.
///
/// Used where a predicate from [`crate::header`] turns into a hard rejection.
///
/// ```ignore
/// ensure!(is_allowed_header_name(name), HeaderError::disallowed(name));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
