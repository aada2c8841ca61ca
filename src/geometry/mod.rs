pub mod vector;

pub use vector::Point3;
