//! Repository layer: one unit struct per table.

mod achievement_repo;
mod category_repo;
mod comment_repo;
mod like_repo;
mod notification_repo;
mod project_repo;
mod stats_repo;
mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use like_repo::LikeRepo;
pub use notification_repo::NotificationRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
