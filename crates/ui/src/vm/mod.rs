mod game_vm;
mod guide_vm;
mod keyboard_vm;

pub use game_vm::{
    AnswerAction, AnswerButtonVm, AnswerHighlight, DifficultyOptionVm, FeedbackVm, ModeCardVm,
    SequenceProgressVm, StatVm, TimeBarVm, TimeTone, answer_grid, difficulty_options,
    feedback_banner, mode_cards, replay_label, sequence_progress, stats, time_bar,
};
pub use guide_vm::{APP_TAGLINE, APP_TITLE, GuideSectionVm, usage_guide};
pub use keyboard_vm::{
    HarmoniumKeyVm, OctaveRowVm, ScaleOptionVm, harmonium_rows, scale_caption, scale_options,
};
