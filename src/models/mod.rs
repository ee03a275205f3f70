pub mod donation;
pub mod locality;
pub mod person;
pub mod request_form;
pub mod supply;

pub use donation::{
    CreateDonation, DonationCreated, DonationErrorResponse, DonationForm, DonationItem,
    StepFlags, SuggestedPlaceToDonate, SuggestionRow, SupplySelection, Tracking, WizardStep,
};
pub use locality::Locality;
pub use person::{Person, PersonAddress};
pub use request_form::{RequestForm, RequestItem};
pub use supply::{CatalogErrorResponse, SupplyModel};
