//! Classic four-character codes.
//!
//! A [`ClassicCode`] is a `u32` that doubles as four Mac OS Roman
//! characters, first character in the highest-order byte. It converts
//! losslessly between the integer, four raw octets, a four-character display
//! form and an eight-digit hex debug form.
//!
//! # Overview
//!
//! - [`ClassicCode`] - the packed value, with byte-level constructors
//! - [`OctetIndex`] - positions of the four octets
//! - [`SubCode`] - a range of octets sliced out of a code
//! - [`swar`] - word-parallel byte predicates behind the O(1) searches
//! - [`CodeError`] - failures for text and byte-source input
//!
//! # Example
//!
//! ```
//! use classic_code::{ClassicCode, OctetIndex};
//!
//! let mut code: ClassicCode = "TEXT".parse().unwrap();
//! assert_eq!(code.to_debug_string(), "54455854");
//! assert!(code.is_printable());
//!
//! code.set_octet(OctetIndex::START, b'N');
//! assert_eq!(code.to_string(), "NEXT");
//! assert_eq!(code.first_index_of(b'X'), Some(OctetIndex::from_position(2)));
//! ```

mod code;
mod error;
mod index;
mod octets;
mod sub_code;
mod text;

pub mod swar;

pub use code::ClassicCode;
pub use error::CodeError;
pub use index::{OctetIndex, STRIDE};
pub use octets::Octets;
pub use sub_code::SubCode;
