// Copyright @yucwang 2026

pub mod parallelogram;
pub mod point;
pub mod segment;
