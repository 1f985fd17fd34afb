mod home;
pub use home::Home;

mod about;
pub use about::About;

mod services;
pub use services::Services;

mod conditions;
pub use conditions::Conditions;

mod contact;
pub use contact::{Contact, FormStatus, Submission};

mod not_found;
pub use not_found::NotFound;
