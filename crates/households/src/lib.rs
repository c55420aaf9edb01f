//! `wastenot-households` — households, members, and their commands.

pub mod household;
pub mod member;

pub use household::{AddHousehold, DeleteHousehold, Household, ModifyHousehold};
pub use member::{AddHouseholdMember, HouseholdMember, Membership, ModifyHouseholdMember};
