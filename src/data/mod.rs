pub mod image_codec;

pub use image_codec::ImageCodec;
