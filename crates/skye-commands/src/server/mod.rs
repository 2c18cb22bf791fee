//! Server statistics card.

pub mod serverinfo;
pub mod snapshot;

pub use serverinfo::{members_or_failure, resolve_target, serverinfo, TargetError};
pub use snapshot::{ChannelAccess, ChannelKind, ChannelTotals, EmojiInfo, EmojiStats, GuildSnapshot, MemberInfo};
