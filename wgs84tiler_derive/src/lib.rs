//! Procedural macros shared by the wgs84tiler crates.
//!
//! The only macro is [`macro@context`], an attribute that attaches an `anyhow` context message to
//! every error leaving the annotated function:
//!
//! ```ignore
//! #[context("saving tile {}/{}/{}", coord.level, coord.x, coord.y)]
//! fn save(coord: &TileCoord) -> Result<()> { ... }
//! ```

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::{ItemFn, ReturnType, parse_macro_input};

#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as ItemFn);

	let body = match wrap_body(&function, &args) {
		Ok(body) => body,
		Err(error) => return error.to_compile_error().into(),
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(body), None)];

	function.into_token_stream().into()
}

fn wrap_body(function: &ItemFn, args: &ContextArgs) -> syn::Result<TokenStream2> {
	let body = &function.block;
	let move_token = &args.move_token;
	let format_args = &args.format_args;
	let err = Ident::new("err", Span::mixed_site());

	let return_type = match &function.sig.output {
		ReturnType::Default => {
			return Err(syn::Error::new_spanned(
				&function.sig,
				"#[context] requires a function returning Result",
			));
		}
		ReturnType::Type(_, ty) => ty,
	};

	if function.sig.asyncness.is_some() {
		let result = Ident::new("result", Span::mixed_site());
		return Ok(quote! {
			let #result: #return_type = async #move_token { #body }.await;
			#result.map_err(|#err| #err.context(format!(#format_args)).into())
		});
	}

	// Moving a non-Copy value into the closure makes it FnOnce, so borrowck accepts
	// bodies that move out of captured arguments.
	let once = Ident::new("once", Span::mixed_site());
	Ok(quote! {
		let #once = ::core::iter::empty::<()>();
		(#move_token || -> #return_type {
			::core::mem::drop(#once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	})
}
