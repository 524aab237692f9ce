pub mod arrays;
pub mod extension;
pub mod functions;
