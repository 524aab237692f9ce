pub mod quack;
