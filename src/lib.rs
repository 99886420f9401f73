mod frame;
mod repack_error;
mod repack_support;
mod yuv420_repack;

pub use repack_support::CropRect;
pub use repack_support::RepackedFormat;

pub use repack_error::MismatchedSize;
pub use repack_error::RepackError;

pub use frame::Yuv420Frame;
pub use frame::YuvPlane;

pub use yuv420_repack::Yuv420Repacker;
