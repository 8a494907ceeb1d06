//! Top-level pages of the conference site.

mod about;
mod architects;
mod home;
mod navigators;
mod register;

pub use about::About;
pub use architects::Architects;
pub use home::Home;
pub use navigators::Navigators;
pub use register::Register;
