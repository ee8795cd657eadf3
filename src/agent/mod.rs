// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Agent layer: the tools exposed to the conversational model and the
//! deterministic invocation workflows.

pub mod invocation;
pub mod reply;
pub mod session;
pub mod tools;

pub use invocation::{handle_invocation, InvocationPayload, InvocationResponse};
pub use session::{PendingSuggestions, SessionStore};
