pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;
