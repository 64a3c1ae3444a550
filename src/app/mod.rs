// Application layer: the list, filters, details and map flows wired to output.

pub mod commands;
pub mod render;
