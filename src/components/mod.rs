// UI Components

pub mod icons;
pub mod profile_card;
pub mod appreciation_overlay;

pub use profile_card::ProfileCard;
