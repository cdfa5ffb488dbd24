//! Flutter-facing bindings for the ClassDesk core.

pub mod api;
