pub mod recorder;
pub mod render;

pub use recorder::spawn_jsonl_recorder;
pub use render::ColorSink;
