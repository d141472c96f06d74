//! Data models for membership portal entities.
//!
//! This module contains the data structures representing meetings, notices,
//! messages, and members from the portal backend, along with the request
//! payload wrappers its API expects.

pub mod meeting;
pub mod member;
pub mod message;
pub mod notice;

pub use meeting::{CreateMeetingRequest, Meeting};
pub use member::{
    AssignRoleRequest, MemberRecord, RegisterMemberRequest, UpdateProfileRequest, UserProfile,
    UserRole,
};
pub use message::{Message, SendMessageRequest};
pub use notice::{CreateNoticeRequest, Notice};
