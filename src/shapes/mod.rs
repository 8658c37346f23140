// Copyright @yucwang 2023

pub mod parallelogram;
pub mod triangle;
