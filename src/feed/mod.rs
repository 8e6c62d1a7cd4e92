//! Readers turning bibliographic exports into [`RawNamePair`](crate::RawNamePair) records.
//!
//! - [`xml::parse_author_xml`] reads author XML: the `<Authors>` training-data
//!   files and raw PubMed efetch responses.
//! - [`medline::parse_medline_authors`] reads `FAU` lines of MEDLINE `.nbib` text.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "xml")] {
//! use pumedoro::feed::xml::parse_author_xml;
//!
//! let input = r#"<Authors>
//!   <Author><FamilyName>Silva</FamilyName><GivenName>Anne-Els</GivenName></Author>
//! </Authors>"#;
//! let authors = parse_author_xml(input).unwrap();
//! assert_eq!(authors[0].given_name_raw.as_deref(), Some("Anne-Els"));
//! # }
//! ```

#[cfg(feature = "pubmed")]
pub mod medline;
#[cfg(feature = "xml")]
pub mod xml;
