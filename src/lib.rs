//! GreenMind: plastic alternative finder and FAQ chatbot service.
//!
//! The catalog and FAQ tables are loaded once at startup (`dataset`), searched
//! by the services in `services`, and exposed to the browser through the JSON
//! routes in `routes`.

pub mod config;
pub mod dataset;
pub mod routes;
pub mod services;
pub mod state;
