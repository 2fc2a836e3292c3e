use crate::server::{
    data::{
        feedback::FeedbackRepository, forum_comment::ForumCommentRepository,
        group_comment::GroupCommentRepository,
    },
    model::comment::{CreateFeedbackParams, CreateForumCommentParams, CreateGroupCommentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod feedback;
mod forum;
mod group_comment;
