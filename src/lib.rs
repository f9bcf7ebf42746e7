//! Contacts API - REST backend for users and their contacts.

pub mod admin;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;
