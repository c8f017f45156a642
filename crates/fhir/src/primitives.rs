//! FHIR primitive types.
//!
//! Every primitive is an [`Element`] over its Rust value type, so all of
//! them share the `name` / `_name` wire handling. Names follow the FHIR type
//! names, which means [`String`] here shadows `std::string::String`.

use crate::datatypes::Extension;
use crate::element::Element;
use crate::temporal::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};

pub type Boolean = Element<bool, Extension>;
pub type Integer = Element<i32, Extension>;
pub type PositiveInt = Element<u32, Extension>;
pub type UnsignedInt = Element<u32, Extension>;

/// Keeps the scale it was written with, so `1.50` stays `1.50`.
pub type Decimal = Element<rust_decimal::Decimal, Extension>;

pub type String = Element<std::string::String, Extension>;
pub type Uri = Element<std::string::String, Extension>;
pub type Url = Element<std::string::String, Extension>;
pub type Canonical = Element<std::string::String, Extension>;
pub type Code = Element<std::string::String, Extension>;
pub type Id = Element<std::string::String, Extension>;
pub type Oid = Element<std::string::String, Extension>;
pub type Uuid = Element<std::string::String, Extension>;
pub type Markdown = Element<std::string::String, Extension>;
pub type Base64Binary = Element<std::string::String, Extension>;

pub type Date = Element<PrecisionDate, Extension>;
pub type DateTime = Element<PrecisionDateTime, Extension>;
pub type Instant = Element<PrecisionInstant, Extension>;
pub type Time = Element<PrecisionTime, Extension>;
