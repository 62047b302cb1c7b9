// Application layer: chart data shaping and terminal rendering.

pub mod charts;
pub mod visualizer;
