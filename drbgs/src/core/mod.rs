//! Bit-level primitives shared by every generator

pub mod rotate;
