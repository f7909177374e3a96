mod activity_card;
mod message_banner;
mod signup_form;

pub use activity_card::ActivityList;
pub use message_banner::MessageBanner;
pub use signup_form::SignupForm;
