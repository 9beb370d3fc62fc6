pub mod analytics;
pub mod auth;
pub mod chanda;
pub mod chokhla;
pub mod dashboard;
pub mod dispatch;
pub mod family;
pub mod member;
pub mod poll;
pub mod request;
pub mod shared;
pub mod validate;
pub mod village;
