mod convert_image;
mod health;
mod image_payload;
mod length_extension;
mod resize_image;
mod split_pdf;

pub use convert_image::convert_image_handler;
pub use health::health_handler;
pub use length_extension::length_extension_handler;
pub use resize_image::resize_image_handler;
pub use split_pdf::split_pdf_handler;
