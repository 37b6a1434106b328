#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use rokka_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

pub mod apis;

mod compose;
pub use compose::{compose, Args, Module, ModuleFn, Operation, Rokka};
