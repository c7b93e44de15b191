mod clip;

pub use clip::ClipDescriptor;
