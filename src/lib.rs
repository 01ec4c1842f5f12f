pub mod config;
pub mod logger;
pub mod media;
pub mod models;
pub mod sanity;
pub mod search;
pub mod seo;
pub mod services;
pub mod web;
