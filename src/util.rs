pub mod nullable;

pub use nullable::*;
