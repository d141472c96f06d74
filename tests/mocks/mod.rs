//! Mock repositories for integration tests.
//!
//! Each mock stores its data behind an `Arc<Mutex<..>>` and tracks how
//! often every trait method is called, so tests can assert cache behavior.

pub mod mock_document_repository;
pub mod mock_meeting_repository;
pub mod mock_member_repository;
pub mod mock_message_repository;
pub mod mock_notice_repository;

#[allow(unused_imports)]
pub use mock_document_repository::MockDocumentRepository;
#[allow(unused_imports)]
pub use mock_meeting_repository::MockMeetingRepository;
#[allow(unused_imports)]
pub use mock_member_repository::MockMemberRepository;
#[allow(unused_imports)]
pub use mock_message_repository::MockMessageRepository;
#[allow(unused_imports)]
pub use mock_notice_repository::MockNoticeRepository;

/// Caller principal every mock assumes for "my account" operations.
#[allow(dead_code)]
pub const CALLER_PRINCIPAL: &str = "w7x7r-cok77-xa";
