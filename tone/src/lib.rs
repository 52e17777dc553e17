//! Business tone conversion.
//!
//! A [`ToneConverter`] rewrites a piece of text for a target audience
//! ([`Persona`]) by sending it to a [`llm::CompletionClient`] together with a
//! fixed instruction for that audience.
//!
//! ```
//! use tone::{ConversionRequest, Persona, ToneConverter};
//!
//! let converter = ToneConverter::unconfigured();
//! let req = ConversionRequest::new("we shipped it", Some("customer"));
//! let completion = converter.completion_request(req.text.as_deref().unwrap(), Persona::Customer);
//! assert_eq!(completion.system_instruction, Persona::Customer.instruction());
//! ```

pub mod converter;
pub mod persona;

pub use converter::{Conversion, ConversionRequest, ConvertError, ToneConverter, DEFAULT_MODEL};
pub use persona::Persona;
