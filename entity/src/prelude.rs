pub use super::emoji_usage::Entity as EmojiUsage;
pub use super::scrub::Entity as Scrub;
