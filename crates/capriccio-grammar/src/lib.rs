//! Text-matching primitives for ordered-choice (PEG) grammars.
//!
//! A grammar is an immutable [`Consumer`] tree built from the constructor
//! functions in this crate. [`evaluate`] runs it against a string with
//! unlimited backtracking and returns the labeled parse tree as a list of
//! [`Matched`] values, or a [`SyntaxError`] pointing at the furthest offset
//! the engine reached.
//!
//! ```
//! use capriccio_grammar::{Matched, discard, evaluate, flatten, label, one_or_more, sequence, CharSet, charset};
//!
//! let digits = label("number", flatten(one_or_more(charset(CharSet::from_chars("0123456789")))));
//! let grammar = sequence([discard("#".into()), digits]);
//! let tree = evaluate(&grammar, "#42").unwrap_or_else(|err| panic!("{err}"));
//! assert_eq!(
//!     tree,
//!     vec![Matched::Node { label: "number", children: vec![Matched::Text("42".into())] }]
//! );
//! ```

mod charset;
mod consumer;
mod engine;
mod errors;
mod matched;

pub use charset::CharSet;
pub use consumer::{
    Consumer, any_except, charset, choice, discard, flatten, interleaved, label, literal,
    literal_ignore_case, not, one_or_more, optional, replace, sequence, zero_or_more,
};
pub use engine::evaluate;
pub use errors::SyntaxError;
pub use matched::Matched;
