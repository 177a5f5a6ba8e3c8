//! Uniform failure for code paths that have not been ported.
//!
//! Fallible functions use [`not_implemented!`](crate::not_implemented) as
//! their whole body. Functions whose signature cannot carry a `Result` call
//! [`raise_not_implemented`], which never returns.

use std::panic::Location;
use tracing::error;

use crate::error::{new_fs_error, ErrorType, FsError};

/// Prefix of every not-implemented diagnostic.
pub const NOT_IMPLEMENTED_MARKER: &str = " +++++  NOT IMPLEMENTED +++++++ Function: ";

/// Build the error reported when `function` is reached at `line`.
///
/// The message is `NOT_IMPLEMENTED_MARKER`, the function name, `" Line: "`
/// and the line number, with kind [`ErrorType::GenericError`].
pub fn not_implemented_error(function: &str, line: u32) -> FsError {
    error!(function, line, "Operation not implemented on this platform");
    new_fs_error(
        ErrorType::GenericError,
        [
            NOT_IMPLEMENTED_MARKER,
            function,
            " Line: ",
            line.to_string().as_str(),
        ],
    )
}

/// Fail the current operation by unwinding with a not-implemented
/// [`FsError`] as the panic payload.
///
/// The line recorded is the caller's.
#[track_caller]
pub fn raise_not_implemented(function: &str) -> ! {
    let line = Location::caller().line();
    std::panic::panic_any(not_implemented_error(function, line))
}

/// Reduce a `type_name` path to the bare name of the enclosing function.
#[doc(hidden)]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::platform::short_function_name(type_name_of(__here))
    }};
}

/// Return a not-implemented error from the enclosing function.
///
/// The function must return `Result<_, E>` with `E: From<FsError>`. The
/// expansion is a `return`, so nothing after it runs and no trailing value
/// is needed.
///
/// ```
/// use fsshim::error::{ErrorType, FsResult};
/// use fsshim::not_implemented;
///
/// fn read_link() -> FsResult<String> {
///     not_implemented!()
/// }
///
/// let err = read_link().unwrap_err();
/// assert_eq!(err.kind(), ErrorType::GenericError);
/// assert!(err.message().contains("Function: read_link Line: "));
/// ```
#[macro_export]
macro_rules! not_implemented {
    () => {
        return ::std::result::Result::Err(::std::convert::From::from(
            $crate::platform::not_implemented_error($crate::function_name!(), line!()),
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FsResult;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_message_format() {
        let err = not_implemented_error("read_dir", 42);
        assert_eq!(
            err.message(),
            " +++++  NOT IMPLEMENTED +++++++ Function: read_dir Line: 42"
        );
        assert_eq!(err.kind(), ErrorType::GenericError);
    }

    #[test]
    fn test_message_contains_marker_text() {
        let err = not_implemented_error("lookup", 1);
        assert!(err.to_string().contains("NOT IMPLEMENTED"));
        assert!(err.to_string().starts_with(NOT_IMPLEMENTED_MARKER));
    }

    #[test]
    fn test_function_name_in_plain_fn() {
        fn some_operation() -> &'static str {
            crate::function_name!()
        }
        assert_eq!(some_operation(), "some_operation");
    }

    #[test]
    fn test_function_name_in_closure() {
        fn outer() -> &'static str {
            let f = || crate::function_name!();
            f()
        }
        assert_eq!(outer(), "outer");
    }

    #[test]
    fn test_function_name_in_method() {
        struct Probe;
        impl Probe {
            fn steal(&self) -> &'static str {
                crate::function_name!()
            }
        }
        assert_eq!(Probe.steal(), "steal");
    }

    #[test]
    fn test_short_function_name_trait_impl_path() {
        let path = "<fsshim::platform::UnsupportedChannel as fsshim::channel::KernelChannel>::read_dir::__here";
        assert_eq!(short_function_name(path), "read_dir");
    }

    #[test]
    fn test_macro_reports_function_and_line() {
        fn stat_file(line: &mut u32) -> FsResult<u64> {
            *line = line!();
            crate::not_implemented!()
        }

        let mut line = 0;
        let err = stat_file(&mut line).unwrap_err();
        assert_eq!(err.kind(), ErrorType::GenericError);
        assert!(err.message().contains("Function: stat_file"));
        assert!(err.message().ends_with(&format!(" Line: {}", line + 1)));
    }

    #[test]
    fn test_macro_skips_code_after_it() {
        static SENTINEL: AtomicBool = AtomicBool::new(false);

        #[allow(unreachable_code)]
        fn guarded() -> FsResult<Vec<String>> {
            crate::not_implemented!();
            SENTINEL.store(true, Ordering::SeqCst);
            Ok(vec!["never".to_string()])
        }

        assert!(guarded().is_err());
        assert!(!SENTINEL.load(Ordering::SeqCst));
    }

    #[test]
    fn test_macro_converts_into_caller_error_type() {
        #[derive(Debug)]
        struct Wrapped(FsError);
        impl From<FsError> for Wrapped {
            fn from(e: FsError) -> Self {
                Wrapped(e)
            }
        }

        fn wrapped_op() -> Result<(), Wrapped> {
            crate::not_implemented!()
        }

        let Wrapped(inner) = wrapped_op().unwrap_err();
        assert!(inner.message().contains("wrapped_op"));
    }

    #[test]
    #[allow(unreachable_code)]
    fn test_raise_never_returns_and_carries_error() {
        let reached = AtomicBool::new(false);
        let mut expected_line = 0;

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            expected_line = line!() + 1;
            raise_not_implemented("connection_info");
            reached.store(true, Ordering::SeqCst);
        }));

        assert!(!reached.load(Ordering::SeqCst));
        let payload = result.unwrap_err();
        let err = payload.downcast_ref::<FsError>().unwrap();
        assert_eq!(err.kind(), ErrorType::GenericError);
        assert_eq!(
            err.message(),
            format!(
                "{}connection_info Line: {}",
                NOT_IMPLEMENTED_MARKER, expected_line
            )
        );
    }

    #[test]
    fn test_repeated_failures_are_identical() {
        fn flush_inode() -> FsResult<()> {
            crate::not_implemented!()
        }

        let first = flush_inode().unwrap_err();
        let second = flush_inode().unwrap_err();
        assert_eq!(first, second);
    }
}
