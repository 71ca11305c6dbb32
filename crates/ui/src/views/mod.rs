mod assessment;
mod dashboard;
mod home;
mod login;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::{LanguageAssessmentView, PersonalityAssessmentView};
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::LoginView;
pub use state::ViewError;
