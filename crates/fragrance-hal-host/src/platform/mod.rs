pub mod display;
pub mod launcher;
pub mod pacer;
#[cfg(feature = "simulator")]
pub mod simulator;

pub use display::{HeadlessPresenter, HostDisplay, HostError, Presenter};
pub use launcher::{BrowserLauncher, RecordingLauncher};
pub use pacer::VBlankPacer;
#[cfg(feature = "simulator")]
pub use simulator::SimulatorPresenter;
