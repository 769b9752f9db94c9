//! Callback function registry
//!
//! The delegate engine stores bare function pointers and knows nothing about
//! names. This module is the host-program side of that contract: a catalog of
//! the callback functions scenarios may subscribe, resolved by name, plus the
//! reverse lookup the report generator uses to label results.

use delegate_core::RetCallback;
use thiserror::Error;

/// Callback signature every registry function shares
pub type Handler = RetCallback<i64, i64>;

/// Errors raised while resolving scenario function names
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown function '{0}' (try --list-functions)")]
    UnknownFunction(String),
}

fn double(x: i64) -> i64 {
    x * 2
}

fn triple(x: i64) -> i64 {
    x * 3
}

fn square(x: i64) -> i64 {
    x * x
}

fn negate(x: i64) -> i64 {
    -x
}

fn half(x: i64) -> i64 {
    x / 2
}

/// Name to handler catalog, in presentation order
const REGISTRY: &[(&str, Handler)] = &[
    ("double", double),
    ("triple", triple),
    ("square", square),
    ("negate", negate),
    ("half", half),
];

/// Resolve a scenario function name to its handler
pub fn resolve(name: &str) -> Result<Handler, RegistryError> {
    REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, handler)| *handler)
        .ok_or_else(|| RegistryError::UnknownFunction(name.to_string()))
}

/// Reverse lookup by handler identity, for labeling report rows
pub fn name_of(handler: Handler) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(_, candidate)| std::ptr::fn_addr_eq(*candidate, handler))
        .map(|(name, _)| *name)
}

/// All registered function names, in presentation order
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}
