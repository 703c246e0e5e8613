mod game;
mod home;
mod settings;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use home::HomeView;
pub use settings::SettingsView;
