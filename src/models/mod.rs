// src/models/mod.rs

pub mod answer;
pub mod grade_request;
pub mod report;
