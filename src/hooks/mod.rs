pub mod use_donation_wizard;
pub mod use_profile;

pub use use_donation_wizard::use_donation_wizard;
pub use use_profile::use_profile;
