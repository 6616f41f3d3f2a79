#![allow(dead_code)]

pub mod amounts;
pub mod files;
