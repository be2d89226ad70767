// src/handlers/mod.rs

pub mod grade;
pub mod health;
