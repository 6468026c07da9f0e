//! HTTP request handlers

pub mod ads;
pub mod games;
pub mod health;
pub mod home;
