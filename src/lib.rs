//! # Tamil Amount Words
//!
//! Converts rupee and paisa amounts into Tamil words, as required when a
//! legal document states a monetary amount in writing.
//!
//! ## Design Principles
//!
//! - **Indian numbering**: thousand, lakh and crore groups
//! - **Exact paisa**: amounts are split via `rust_decimal`, with explicit carry
//! - **Fail fast**: negative or non-finite input is an error, never a string
//! - **Pure**: immutable lexicon tables, no shared state
//!
//! ## Example
//!
//! ```
//! use tamil_amount_words::amount_to_words;
//!
//! let words = amount_to_words(1500.50).unwrap();
//! assert_eq!(words, "ஆயிரம் ஐந்து நூறு ரூபாய் மற்றும் ஐம்பது காசு");
//! ```

pub mod amount;
pub mod batch;
pub mod error;
pub mod lexicon;
pub mod words;

pub use amount::Amount;
pub use batch::{AmountRecord, BatchConverter, ConvertedRow};
pub use error::{Result, WordsError};
pub use words::{amount_to_words, amount_words, decimal_to_words, integer_to_words};
