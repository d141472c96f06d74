//! Member directory tools.
//!
//! Provides cached access to usernames and member records, text filtering,
//! recipient resolution for messaging, and account mutations.

use crate::cache::TimedCache;
use crate::error::PortalApiResult;
use crate::models::{MemberRecord, UserProfile, UserRole};
use crate::repositories::MemberRepository;
use crate::search::filter_by_search;
use std::sync::Arc;

const USERNAMES_CACHE_KEY: &str = "all_usernames";
const MEMBERS_CACHE_KEY: &str = "all_members";

/// Member directory tools for lookups, search, and account mutations.
pub struct DirectoryTools {
    member_repo: Arc<dyn MemberRepository>,
    username_cache: Arc<TimedCache<String, Vec<String>>>,
    member_cache: Arc<TimedCache<String, Vec<MemberRecord>>>,
    cache_ttl_secs: u64,
}

/// Response from username listings with cache metadata.
#[derive(Debug, Clone)]
pub struct UsernameListResponse {
    /// Registered usernames
    pub usernames: Vec<String>,

    /// Whether the results came from cache
    pub from_cache: bool,
}

/// Response from member listings with cache metadata.
#[derive(Debug, Clone)]
pub struct MemberListResponse {
    /// Directory records
    pub members: Vec<MemberRecord>,

    /// Whether the results came from cache
    pub from_cache: bool,
}

/// Outcome of resolving a message recipient against the directory.
///
/// Usernames are matched case-sensitively. When only the casing differs,
/// the actual username is carried so callers can suggest it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientResolution {
    /// The username exists exactly as given.
    Found,
    /// No exact match, but a username differs only by case.
    CaseMismatch(String),
    /// No username matches at all.
    Unknown,
}

impl DirectoryTools {
    /// Create new directory tools.
    ///
    /// # Arguments
    /// * `member_repo` - MemberRepository for data access
    /// * `cache_ttl_secs` - Cache time-to-live in seconds
    pub fn new(member_repo: Arc<dyn MemberRepository>, cache_ttl_secs: u64) -> Self {
        Self {
            member_repo,
            username_cache: Arc::new(TimedCache::new(cache_ttl_secs)),
            member_cache: Arc::new(TimedCache::new(cache_ttl_secs)),
            cache_ttl_secs,
        }
    }

    /// Get all registered usernames.
    pub async fn all_usernames(&self) -> PortalApiResult<UsernameListResponse> {
        let (usernames, from_cache) = self.get_cached_usernames().await?;

        Ok(UsernameListResponse {
            usernames,
            from_cache,
        })
    }

    /// Get all directory records.
    pub async fn all_members(&self) -> PortalApiResult<MemberListResponse> {
        let (members, from_cache) = self.get_cached_members().await?;

        Ok(MemberListResponse {
            members,
            from_cache,
        })
    }

    /// Search usernames by the query.
    pub async fn search_usernames(&self, query: &str) -> PortalApiResult<UsernameListResponse> {
        let (usernames, from_cache) = self.get_cached_usernames().await?;

        let usernames = filter_by_search(usernames, query, |username| vec![username.clone()]);

        Ok(UsernameListResponse {
            usernames,
            from_cache,
        })
    }

    /// Search directory records by name and email.
    pub async fn search_members(&self, query: &str) -> PortalApiResult<MemberListResponse> {
        let (members, from_cache) = self.get_cached_members().await?;

        let members = filter_by_search(members, query, |record| {
            vec![record.profile.name.clone(), record.profile.email.clone()]
        });

        Ok(MemberListResponse {
            members,
            from_cache,
        })
    }

    /// Get the number of registered members.
    pub async fn member_count(&self) -> PortalApiResult<u64> {
        self.member_repo.count().await
    }

    /// Get the profile of a member by principal.
    pub async fn profile_of(&self, principal: &str) -> PortalApiResult<UserProfile> {
        self.member_repo.profile_of(principal).await
    }

    /// Resolve a message recipient against the registered usernames.
    pub async fn resolve_recipient(&self, name: &str) -> PortalApiResult<RecipientResolution> {
        let (usernames, _) = self.get_cached_usernames().await?;

        if usernames.iter().any(|username| username == name) {
            return Ok(RecipientResolution::Found);
        }

        let name_lower = name.to_lowercase();
        if let Some(close) = usernames
            .iter()
            .find(|username| username.to_lowercase() == name_lower)
        {
            return Ok(RecipientResolution::CaseMismatch(close.clone()));
        }

        Ok(RecipientResolution::Unknown)
    }

    /// Register the caller with the given profile.
    ///
    /// Invalidates the directory caches so listings include the new member.
    pub async fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        let registered = self.member_repo.register(profile).await?;
        self.invalidate_caches();
        Ok(registered)
    }

    /// Get the caller's own profile.
    pub async fn my_profile(&self) -> PortalApiResult<UserProfile> {
        self.member_repo.my_profile().await
    }

    /// Update the caller's profile.
    pub async fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        let updated = self.member_repo.update_my_profile(profile).await?;
        self.invalidate_caches();
        Ok(updated)
    }

    /// Get the caller's role.
    pub async fn my_role(&self) -> PortalApiResult<UserRole> {
        self.member_repo.my_role().await
    }

    /// Assign a role to a member (admin only).
    pub async fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()> {
        self.member_repo.assign_role(principal, role).await?;
        self.invalidate_caches();
        Ok(())
    }

    /// Get all usernames from cache or API.
    async fn get_cached_usernames(&self) -> PortalApiResult<(Vec<String>, bool)> {
        let cache_key = USERNAMES_CACHE_KEY.to_string();

        if let Some(usernames) = self.username_cache.get(&cache_key) {
            tracing::debug!("Using cached usernames");
            return Ok((usernames, true));
        }

        // The usernames endpoint returns the full list in one response.
        let usernames = self.member_repo.usernames().await?;
        self.username_cache.insert(cache_key, usernames.clone());

        Ok((usernames, false))
    }

    /// Get all directory records from cache or API.
    async fn get_cached_members(&self) -> PortalApiResult<(Vec<MemberRecord>, bool)> {
        let cache_key = MEMBERS_CACHE_KEY.to_string();

        if let Some(members) = self.member_cache.get(&cache_key) {
            tracing::debug!("Using cached members");
            return Ok((members, true));
        }

        // Cache miss - fetch from repository in pages of 100
        let mut all_members = Vec::new();
        let mut offset = 0;
        const PAGE_SIZE: usize = 100;

        loop {
            let members = self.member_repo.list(PAGE_SIZE, offset).await?;
            let count = members.len();
            all_members.extend(members);

            if count < PAGE_SIZE {
                // Last page
                break;
            }

            offset += PAGE_SIZE;
        }

        self.member_cache.insert(cache_key, all_members.clone());

        Ok((all_members, false))
    }

    /// Invalidate both directory caches.
    pub fn invalidate_caches(&self) {
        self.username_cache.remove(&USERNAMES_CACHE_KEY.to_string());
        self.member_cache.remove(&MEMBERS_CACHE_KEY.to_string());
    }

    /// Get the current cache TTL in seconds.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }
}
