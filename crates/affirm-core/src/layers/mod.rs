//! The composited layers, drawn back to front every rendered frame.

pub mod background;
pub mod breathing;
pub mod flowing;
pub mod text;

pub use background::BackgroundLayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    BreathingCircle,
    FlowingLines,
    Particles,
    Text,
}

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::BreathingCircle => "breathing-circle",
            Layer::FlowingLines => "flowing-lines",
            Layer::Particles => "particles",
            Layer::Text => "text",
        }
    }
}
