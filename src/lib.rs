//! Turns arbitrary global-symbol names into strings that are legal in
//! assembler and object-file symbol syntax. One `Mangler` instance serves
//! one compilation unit; identical inputs always mangle to identical
//! outputs within an instance.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod charset;
pub mod mangle;
pub mod symbol;
