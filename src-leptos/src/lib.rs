//! Mortgage Admin - Leptos Frontend Library

pub mod app;
pub mod components;
pub mod formatters;
pub mod pages;
pub mod storage;
