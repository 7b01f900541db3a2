mod display;
mod session;

pub use display::{render_lines, render_market};
pub use session::DashboardSession;
