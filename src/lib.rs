//! Pokedex - catalog browser over PokeAPI built on tui-dispatch
//!
//! The library holds the catalog client, state, reducer and components;
//! the binary wires them into a terminal runtime.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod store;
