//! Observability for the JWKS server.
//!
//! Request logging lives on the router (see `routes`); this module holds the
//! metric definitions. No exporter is installed by the server itself, so the
//! counters are no-ops unless an embedding process installs a recorder.

pub mod metrics;
