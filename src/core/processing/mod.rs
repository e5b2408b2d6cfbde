pub mod circularize;
pub mod flatten;
pub mod pipeline;
pub mod resize;
pub mod save;
