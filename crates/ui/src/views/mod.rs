mod games;
mod guide;
mod practice;
mod scale;
mod state;

pub use games::GamesView;
pub use guide::{AppHeader, UsageGuide};
pub use practice::PracticeView;
pub use scale::ScaleSelector;
pub use state::use_session_state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
