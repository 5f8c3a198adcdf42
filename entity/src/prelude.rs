pub use super::impression::Entity as Impression;
pub use super::prayer::Entity as Prayer;
pub use super::prayer_participant::Entity as PrayerParticipant;
