pub mod emitter;
pub mod model;
pub mod parser;
