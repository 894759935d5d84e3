//! Infrastructure services

mod post_service;

pub use post_service::PostGenerator;
