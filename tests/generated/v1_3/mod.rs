// Code generated by devtools-protogen from protocol version 1.3. DO NOT EDIT.

//! Protocol version 1.3.

#![allow(non_camel_case_types, non_snake_case, clippy::all, dead_code, unused_imports)]

/// `A` domain.
pub mod a;
pub use a::*;

/// `B` domain.
pub mod b;
pub use b::*;

/// `Lab` domain.
pub mod lab;
pub use lab::*;
