use proc_macro::TokenStream;
use syn_utils::into_macro_output;

#[macro_use]
mod syn_utils;

mod invalidating_setters_impl;

/// Generates a `set_<field>` method for every `Invalidating` field of a struct.
///
/// See `invalidating::InvalidatingSetters` for details.
#[proc_macro_derive(InvalidatingSetters, attributes(invalidating))]
pub fn derive_invalidating_setters(input: TokenStream) -> TokenStream {
    into_macro_output(invalidating_setters_impl::invalidating_setters(input.into()))
}
