//! Interactive views and the signals that switch between them: a small
//! state machine driving the terminal UI.

mod home_view;
mod login_view;
mod signal;
mod view;

pub(crate) use home_view::HomeView;
pub(crate) use login_view::LoginView;
pub(crate) use signal::ViewExitSignal;
pub(crate) use view::View;
