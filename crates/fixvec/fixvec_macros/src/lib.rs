//! Procedural macros for the `fixvec` crate.

mod swizzle;

use lazy_static::lazy_static;
use proc_macro::TokenStream;
use proc_macro_crate::{self, FoundCrate};
use proc_macro2::{Ident, Span};
use syn::parse_macro_input;

/// Generates swizzle accessors for a vector type.
///
/// ```ignore
/// swizzles!(Vector3, [Vector2, Vector3, Vector4], [x, y, z], [r, g, b]);
/// ```
///
/// The first argument is the vector type to implement the accessors on. The
/// second lists the 2-, 3- and 4-component vector types that multi-component
/// swizzles return, which must have fields named `x`, `y`, `z` and `w` (in
/// that order, as far as their arity goes) and a `new` constructor taking one
/// argument per component. The third lists the field names of the vector type
/// and the fourth the letters the accessors use for the corresponding fields.
///
/// For every sequence of one to four letters, a getter returning the
/// addressed components is generated (a scalar for one letter, otherwise a
/// vector of the sequence's length). Sequences without repeated letters also
/// get a `set_` method scattering a value back into the addressed fields,
/// and single letters get a `_mut` method returning a mutable reference.
#[proc_macro]
pub fn swizzles(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as swizzle::SwizzlesInput);
    swizzle::swizzles(input, &crate_root_ident())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

const CRATE_NAME: &str = "fixvec";

lazy_static! {
    static ref CRATE_IMPORT_ROOT: String = determine_crate_import_root();
}

/// Determines whether to use `crate` or the actual crate name as root
/// for paths in the generated code.
fn determine_crate_import_root() -> String {
    match proc_macro_crate::crate_name(CRATE_NAME) {
        Ok(FoundCrate::Itself) | Err(_) => "crate".to_string(),
        Ok(FoundCrate::Name(name)) => name,
    }
}

fn crate_root_ident() -> Ident {
    Ident::new(CRATE_IMPORT_ROOT.as_str(), Span::call_site())
}
