mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Implements `poly_error::ErrorKind` for a struct describing one kind of user-facing error.
///
/// The struct is configured with a single `#[error(...)]` attribute:
///
/// - `message = <expr>`: the headline of the report.
/// - `labels = <expr>`: the label text for each span of the error, in span order. The expression
///   must be iterable; items are converted with `to_string`.
/// - `help = <expr>` (optional): a hint shown below the labels.
///
/// The expressions are evaluated inside `build_report`, where `self` is the error kind, so
/// messages can mention the fields of the struct:
///
/// ```
/// use poly_attrs::ErrorKind;
/// use poly_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("expected {} more operands", self.missing),
///     labels = ["this command"],
/// )]
/// pub struct MissingOperands {
///     missing: usize,
/// }
/// ```
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    target.into_token_stream().into()
}
