// Copyright @yucwang 2026

pub mod direct;
pub mod direct_lighting;
pub mod visibility;
