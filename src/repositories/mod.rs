mod portal_document_repository;
mod portal_meeting_repository;
mod portal_member_repository;
mod portal_message_repository;
mod portal_notice_repository;
mod traits;

pub use portal_document_repository::PortalDocumentRepository;
pub use portal_meeting_repository::PortalMeetingRepository;
pub use portal_member_repository::PortalMemberRepository;
pub use portal_message_repository::PortalMessageRepository;
pub use portal_notice_repository::PortalNoticeRepository;
pub use traits::{
    DocumentRepository, MeetingRepository, MemberRepository, MessageRepository, NoticeRepository,
};
