//! Macro for generating swizzle accessors.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Result, Token, bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Component names of the vector types returned by multi-component
/// swizzles.
const TARGET_FIELDS: [&str; 4] = ["x", "y", "z", "w"];

const MAX_SWIZZLE_LEN: usize = 4;

pub(crate) struct SwizzlesInput {
    vector_type: Ident,
    target_types: Vec<Ident>,
    fields: Vec<Ident>,
    letters: Vec<Ident>,
}

pub(crate) fn swizzles(input: SwizzlesInput, crate_root: &Ident) -> Result<TokenStream> {
    input.validate()?;

    let SwizzlesInput {
        vector_type,
        target_types,
        fields,
        letters,
    } = input;

    let mut methods = Vec::new();

    for len in 1..=MAX_SWIZZLE_LEN {
        for indices in index_sequences(fields.len(), len) {
            let name: String = indices.iter().map(|&idx| letters[idx].to_string()).collect();
            let selected: Vec<&Ident> = indices.iter().map(|&idx| &fields[idx]).collect();

            if len == 1 {
                methods.push(generate_component_accessors(&name, selected[0]));
            } else {
                let target_type = &target_types[len - 2];
                methods.push(generate_getter(&name, target_type, &selected));

                if !has_repeats(&indices) {
                    methods.push(generate_setter(&name, target_type, &selected));
                }
            }
        }
    }

    Ok(quote! {
        impl<T: #crate_root::scalar::Scalar> #vector_type<T> {
            #(#methods)*
        }
    })
}

fn generate_component_accessors(name: &str, field: &Ident) -> TokenStream {
    let getter = format_ident!("{}", name);
    let getter_mut = format_ident!("{}_mut", name);
    let setter = format_ident!("set_{}", name);

    let getter_doc = format!("The `{name}` component.");
    let getter_mut_doc = format!("A mutable reference to the `{name}` component.");
    let setter_doc = format!("Sets the `{name}` component to the given value.");

    quote! {
        #[doc = #getter_doc]
        #[inline]
        pub const fn #getter(&self) -> T {
            self.#field
        }

        #[doc = #getter_mut_doc]
        #[inline]
        pub fn #getter_mut(&mut self) -> &mut T {
            &mut self.#field
        }

        #[doc = #setter_doc]
        #[inline]
        pub fn #setter(&mut self, value: T) {
            self.#field = value;
        }
    }
}

fn generate_getter(name: &str, target_type: &Ident, selected: &[&Ident]) -> TokenStream {
    let getter = format_ident!("{}", name);
    let doc = format!(
        "Returns a vector made of the {} components, in that order.",
        list_components(name)
    );

    quote! {
        #[doc = #doc]
        #[inline]
        pub const fn #getter(&self) -> #target_type<T> {
            #target_type::new(#(self.#selected),*)
        }
    }
}

fn generate_setter(name: &str, target_type: &Ident, selected: &[&Ident]) -> TokenStream {
    let setter = format_ident!("set_{}", name);
    let doc = format!(
        "Assigns the components of the given vector to the {} components, in that order.",
        list_components(name)
    );

    let source_fields = TARGET_FIELDS[..selected.len()]
        .iter()
        .map(|field| Ident::new(field, Span::call_site()));

    quote! {
        #[doc = #doc]
        #[inline]
        pub fn #setter(&mut self, value: #target_type<T>) {
            #(self.#selected = value.#source_fields;)*
        }
    }
}

fn list_components(name: &str) -> String {
    let letters: Vec<String> = name.chars().map(|letter| format!("`{letter}`")).collect();
    match letters.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        _ => letters.concat(),
    }
}

/// Returns every sequence of `len` indices in `0..n`, with repetition, in
/// lexicographic order.
fn index_sequences(n: usize, len: usize) -> Vec<Vec<usize>> {
    let mut sequences = Vec::with_capacity(n.pow(len as u32));
    let mut current = vec![0; len];

    loop {
        sequences.push(current.clone());

        let mut position = len;
        loop {
            if position == 0 {
                return sequences;
            }
            position -= 1;
            current[position] += 1;
            if current[position] < n {
                break;
            }
            current[position] = 0;
        }
    }
}

fn has_repeats(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .any(|(i, idx)| indices[..i].contains(idx))
}

impl SwizzlesInput {
    fn validate(&self) -> Result<()> {
        let n_fields = self.fields.len();

        if !(2..=MAX_SWIZZLE_LEN).contains(&n_fields) {
            return Err(syn::Error::new(
                self.vector_type.span(),
                format!("expected 2 to {MAX_SWIZZLE_LEN} fields, got {n_fields}"),
            ));
        }
        if self.letters.len() != n_fields {
            return Err(syn::Error::new(
                self.vector_type.span(),
                format!(
                    "expected one accessor letter per field ({n_fields}), got {}",
                    self.letters.len()
                ),
            ));
        }
        if self.target_types.len() != MAX_SWIZZLE_LEN - 1 {
            return Err(syn::Error::new(
                self.vector_type.span(),
                "expected the 2-, 3- and 4-component target vector types",
            ));
        }
        for (i, letter) in self.letters.iter().enumerate() {
            if letter.to_string().chars().count() != 1 {
                return Err(syn::Error::new(
                    letter.span(),
                    "accessor letters must be single characters",
                ));
            }
            if self.letters[..i].contains(letter) {
                return Err(syn::Error::new(
                    letter.span(),
                    "accessor letters must be unique",
                ));
            }
        }
        Ok(())
    }
}

impl Parse for SwizzlesInput {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let vector_type = input.parse()?;
        input.parse::<Token![,]>()?;
        let target_types = parse_bracketed_idents(input)?;
        input.parse::<Token![,]>()?;
        let fields = parse_bracketed_idents(input)?;
        input.parse::<Token![,]>()?;
        let letters = parse_bracketed_idents(input)?;
        // Allow a trailing comma
        let _ = input.parse::<Option<Token![,]>>()?;

        Ok(Self {
            vector_type,
            target_types,
            fields,
            letters,
        })
    }
}

fn parse_bracketed_idents(input: ParseStream<'_>) -> Result<Vec<Ident>> {
    let content;
    bracketed!(content in input);
    let idents: Punctuated<Ident, Token![,]> = Punctuated::parse_terminated(&content)?;
    Ok(idents.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_sequences_cover_all_combinations_in_order() {
        let sequences = index_sequences(2, 2);
        assert_eq!(sequences, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
        assert_eq!(index_sequences(4, 4).len(), 256);
        assert_eq!(index_sequences(3, 1), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn repeats_are_detected() {
        assert!(has_repeats(&[0, 1, 0]));
        assert!(!has_repeats(&[2, 1, 0]));
        assert!(!has_repeats(&[3]));
    }

    #[test]
    fn component_lists_read_naturally() {
        assert_eq!(list_components("x"), "`x`");
        assert_eq!(list_components("xy"), "`x` and `y`");
        assert_eq!(list_components("zyx"), "`z`, `y` and `x`");
    }

    #[test]
    fn parsing_and_generation_work_for_valid_input() {
        let input: SwizzlesInput =
            syn::parse_quote!(Vector2, [Vector2, Vector3, Vector4], [x, y], [r, g]);
        let root = Ident::new("crate", Span::call_site());
        let output = swizzles(input, &root).unwrap().to_string();

        assert!(output.contains("fn rg"));
        assert!(output.contains("fn set_gr"));
        assert!(output.contains("fn rrrr"));
        assert!(!output.contains("fn set_rr "));
    }

    #[test]
    fn mismatched_letter_count_is_rejected() {
        let input: SwizzlesInput =
            syn::parse_quote!(Vector3, [Vector2, Vector3, Vector4], [x, y, z], [r, g]);
        let root = Ident::new("crate", Span::call_site());
        assert!(swizzles(input, &root).is_err());
    }

    #[test]
    fn duplicate_letters_are_rejected() {
        let input: SwizzlesInput =
            syn::parse_quote!(Vector2, [Vector2, Vector3, Vector4], [x, y], [r, r]);
        let root = Ident::new("crate", Span::call_site());
        assert!(swizzles(input, &root).is_err());
    }
}
