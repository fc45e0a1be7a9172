pub mod frame;
pub mod pipeline;
pub mod system;

pub use frame::FrameTransforms;
pub use system::BinarySystem;
