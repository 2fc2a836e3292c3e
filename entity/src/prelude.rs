pub use super::connection::Entity as Connection;
pub use super::engagement::Entity as Engagement;
pub use super::feedback_comment::Entity as FeedbackComment;
pub use super::forum_comment::Entity as ForumComment;
pub use super::group::Entity as Group;
pub use super::group_comment::Entity as GroupComment;
pub use super::interest::Entity as Interest;
pub use super::kyc_application::Entity as KycApplication;
pub use super::notification::Entity as Notification;
pub use super::opening::Entity as Opening;
pub use super::page_visit::Entity as PageVisit;
pub use super::partnership::Entity as Partnership;
pub use super::partnership_group::Entity as PartnershipGroup;
pub use super::payment::Entity as Payment;
pub use super::plan::Entity as Plan;
pub use super::reaction::Entity as Reaction;
pub use super::report::Entity as Report;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;
pub use super::verification::Entity as Verification;
