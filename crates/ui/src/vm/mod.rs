mod menu_vm;
mod round_vm;

pub use menu_vm::{ModeCardVm, map_mode_cards};
pub use round_vm::{CandidateVm, QuestionBody, RoundVm, map_round};
