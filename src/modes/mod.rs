pub mod audio;
pub mod clock;
pub mod human;

pub use audio::AudioPlayer;
pub use clock::FrameClock;
pub use human::HumanMode;
