mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryImageHost, SignatureAlgorithm};
