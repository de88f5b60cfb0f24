mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use deriv_attrs::ErrorKind;
/// use deriv_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of expression", labels = ["add a term here"])]
/// pub struct Foo;
///
/// assert_eq!(Foo.message(), "unexpected end of expression");
/// let report = Foo.build_report("input", &[3..3]);
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error, also returned by `message`.   |
/// | `labels`    | An array with the text of the label for each span of the error, in order.    |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` is required. Each tag accepts an expression that evaluates to something
/// [`ToString`] (`labels` is an array of such expressions). For structs with named fields, the
/// expression is evaluated with the fields of the struct in scope, so they can be used in the
/// expression (tuple structs are not supported). An empty label highlights its span without any
/// text.
///
/// The generated code refers to the `ariadne` and `deriv_error` crates, which must both be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
