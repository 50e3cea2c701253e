//! Alternate tree-to-text renderers.
//!
//! Peripheral consumers of the parsed tree: a reverse-Polish emitter and a
//! LISP-style prefix emitter. They share the tree contract with the
//! evaluator but produce text instead of values.

pub mod translators;
