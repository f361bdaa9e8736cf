//! Terminal client for the folio API.
//!
//! The [`controller`] owns all client-side state: the fetched record list,
//! the locally-derived filtered view, and the current notice. The [`view`]
//! renderers are pure functions from that state to display strings, and the
//! binary wires both to an interactive command loop. No module here mutates
//! state on its own; every change to the record list happens only after a
//! confirmed server response.

pub mod api;
pub mod controller;
pub mod form;
pub mod model;
pub mod view;
