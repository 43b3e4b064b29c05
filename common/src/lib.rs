pub mod shapes;
pub mod vector;
