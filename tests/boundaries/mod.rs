//! Boundary and edge case tests
//!
//! Empty inputs, single elements, and sizes well past anything the demos
//! use.

mod single_element;
