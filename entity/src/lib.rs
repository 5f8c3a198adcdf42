pub mod impression;
pub mod prayer;
pub mod prayer_participant;
pub mod prelude;
