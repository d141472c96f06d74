use async_trait::async_trait;
use portal_mcp_server::error::{PortalApiError, PortalApiResult};
use portal_mcp_server::models::{MemberRecord, UserProfile, UserRole};
use portal_mcp_server::repositories::MemberRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock member repository for testing.
///
/// Holds directory records plus a role table, and models the caller's
/// account the way the backend does: profile reads for an unregistered
/// caller fail with `NotFound`, and an unregistered caller is a guest.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMemberRepository {
    records: Arc<Mutex<Vec<MemberRecord>>>,
    roles: Arc<Mutex<HashMap<String, UserRole>>>,
    caller: Arc<Mutex<String>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockMemberRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            roles: Arc::new(Mutex::new(HashMap::new())),
            caller: Arc::new(Mutex::new(super::CALLER_PRINCIPAL.to_string())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_member(&self, principal: &str, name: &str, email: &str) {
        let mut records = self.records.lock().unwrap();
        records.push(MemberRecord {
            principal: principal.to_string(),
            profile: UserProfile::new(name, email),
        });

        let mut roles = self.roles.lock().unwrap();
        roles.entry(principal.to_string()).or_insert(UserRole::User);
    }

    pub fn set_caller(&self, principal: &str) {
        let mut caller = self.caller.lock().unwrap();
        *caller = principal.to_string();
    }

    pub fn set_role(&self, principal: &str, role: UserRole) {
        let mut roles = self.roles.lock().unwrap();
        roles.insert(principal.to_string(), role);
    }

    pub fn role_of(&self, principal: &str) -> Option<UserRole> {
        let roles = self.roles.lock().unwrap();
        roles.get(principal).copied()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn current_caller(&self) -> String {
        self.caller.lock().unwrap().clone()
    }
}

impl Default for MockMemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepository for MockMemberRepository {
    async fn list(&self, limit: usize, offset: usize) -> PortalApiResult<Vec<MemberRecord>> {
        self.track_call("list");

        let records = self.records.lock().unwrap();
        let result: Vec<MemberRecord> = records.iter().skip(offset).take(limit).cloned().collect();
        Ok(result)
    }

    async fn usernames(&self) -> PortalApiResult<Vec<String>> {
        self.track_call("usernames");

        let records = self.records.lock().unwrap();
        Ok(records.iter().map(|r| r.profile.name.clone()).collect())
    }

    async fn count(&self) -> PortalApiResult<u64> {
        self.track_call("count");

        let records = self.records.lock().unwrap();
        Ok(records.len() as u64)
    }

    async fn profile_of(&self, principal: &str) -> PortalApiResult<UserProfile> {
        self.track_call("profile_of");

        let records = self.records.lock().unwrap();
        records
            .iter()
            .find(|r| r.principal == principal)
            .map(|r| r.profile.clone())
            .ok_or_else(|| PortalApiError::NotFound(format!("Member {} not found", principal)))
    }

    async fn register(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        self.track_call("register");

        let caller = self.current_caller();
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.principal == caller) {
            return Err(PortalApiError::InvalidRequest(
                "Caller is already registered".to_string(),
            ));
        }

        records.push(MemberRecord {
            principal: caller.clone(),
            profile: profile.clone(),
        });

        let mut roles = self.roles.lock().unwrap();
        roles.insert(caller, UserRole::User);

        Ok(profile.clone())
    }

    async fn my_profile(&self) -> PortalApiResult<UserProfile> {
        self.track_call("my_profile");

        let caller = self.current_caller();
        let records = self.records.lock().unwrap();
        records
            .iter()
            .find(|r| r.principal == caller)
            .map(|r| r.profile.clone())
            .ok_or_else(|| PortalApiError::NotFound("Caller is not registered".to_string()))
    }

    async fn update_my_profile(&self, profile: &UserProfile) -> PortalApiResult<UserProfile> {
        self.track_call("update_my_profile");

        let caller = self.current_caller();
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.principal == caller)
            .ok_or_else(|| PortalApiError::NotFound("Caller is not registered".to_string()))?;

        record.profile = profile.clone();
        Ok(profile.clone())
    }

    async fn my_role(&self) -> PortalApiResult<UserRole> {
        self.track_call("my_role");

        let caller = self.current_caller();
        let roles = self.roles.lock().unwrap();
        Ok(roles.get(&caller).copied().unwrap_or(UserRole::Guest))
    }

    async fn assign_role(&self, principal: &str, role: UserRole) -> PortalApiResult<()> {
        self.track_call("assign_role");

        let records = self.records.lock().unwrap();
        if !records.iter().any(|r| r.principal == principal) {
            return Err(PortalApiError::NotFound(format!(
                "Member {} not found",
                principal
            )));
        }
        drop(records);

        let mut roles = self.roles.lock().unwrap();
        roles.insert(principal.to_string(), role);
        Ok(())
    }
}
