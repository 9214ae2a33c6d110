//! Model types for member-store

mod features;
mod member_id;
mod member_status;
mod player_state;

pub use features::MemberFeatures;
pub use member_id::MemberId;
pub use member_status::MemberStatus;
pub use player_state::PlayerState;
