pub mod analytics;
pub mod auth;
pub mod chanda;
pub mod chokhla;
pub mod family;
pub mod member;
pub mod poll;
pub mod request;
pub mod village;

pub use analytics::AnalyticsCommands;
pub use auth::AuthCommands;
pub use chanda::ChandaCommands;
pub use chokhla::ChokhlaCommands;
pub use family::FamilyCommands;
pub use member::MemberCommands;
pub use poll::PollCommands;
pub use request::RequestCommands;
pub use village::VillageCommands;
