//! View models for the presentation layer.
//!
//! Each view model transforms domain data into a presentation-friendly
//! shape and is directly renderable by its Askama template. Handlers
//! never build HTML strings by hand.

pub mod campaign;
pub mod error;
pub mod new_campaign;

pub use campaign::CampaignView;
pub use error::ErrorView;
pub use new_campaign::NewCampaignView;
