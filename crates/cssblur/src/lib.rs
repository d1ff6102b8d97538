//! Span-preserving blurring of function-call arguments in CSS-like text.
//!
//! Regular-expression scans over stylesheets routinely trip over the contents
//! of `url(...)`, which may contain nearly anything. [`blur_function_arguments`]
//! overwrites the argument text of every call to a named function with a
//! placeholder character, one placeholder per original character, so a scan
//! can run over the blurred copy while every offset it reports stays valid
//! against the original.
//!
//! ```
//! let blurred = cssblur::blur_function_arguments("abc url(abc) abc", "url")?;
//! assert_eq!(blurred, "abc url(```) abc");
//! # Ok::<(), cssblur::BlurError>(())
//! ```

pub mod balanced;
mod blur;

pub use balanced::{find_balanced, BalancedSpan};
pub use blur::{
    blur_function_arguments, blur_function_arguments_with, BlurError, DEFAULT_BLUR_CHAR,
};
