mod app;
pub use app::Soundboard;
