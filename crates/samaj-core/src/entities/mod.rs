//! Entity structs mirrored from the census backend schema.
//!
//! Records are plain data: the backend owns persistence and most invariants.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` and use the
//! backend's camelCase field names. The same struct doubles as the create/update
//! payload, so server-assigned fields (`id`, aggregates, timestamps) default
//! when absent and are skipped when empty.

mod chanda;
mod chokhla;
mod dashboard;
mod family;
mod page;
mod person;
mod poll;
mod request;
mod user;
mod village;

pub use chanda::{ChandaEntry, ChandaRecord};
pub use chokhla::Chokhla;
pub use dashboard::{ChokhlaDashboard, DashboardStats, VillageDashboard};
pub use family::Family;
pub use page::Paginated;
pub use person::Person;
pub use poll::{Poll, PollOption, PollQuestion};
pub use request::FamilyRequest;
pub use user::{AuthUser, LoginResponse, PasswordChange, ProfileUpdate};
pub use village::Village;
