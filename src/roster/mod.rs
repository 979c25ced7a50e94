//! Roster handling: the data model, the raw-record normalizer and the
//! team balancer.

pub mod balancer;
pub mod models;
pub mod normalizer;

pub use balancer::{average_height, balance};
pub use models::{BalancedRoster, Player, RawPlayer, Team};
pub use normalizer::normalize;
