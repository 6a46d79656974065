multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_HAS_ROLE, ERR_INVALID_ACCOUNT, ERR_MISSING_ROLE, ERR_UNAUTHORIZED,
};
use crate::types::AccessRole;

// ============================================================
// Access registry
// One transferable owner plus a membership table per role.
// Both role tables are administered by whitelist admins.
// ============================================================

#[multiversx_sc::module]
pub trait AccessModule {
    fn init_access(&self, owner: &ManagedAddress) {
        self.owner().set(owner);
        self.add_role_member(AccessRole::WhitelistAdmin, owner);
    }

    // ========================================================
    // Ownership
    // ========================================================

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_INVALID_ACCOUNT);

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);
        self.ownership_transferred_event(&previous_owner, &new_owner);
    }

    // ========================================================
    // Generic role management
    // ========================================================

    #[endpoint(grantRole)]
    fn grant_role(&self, role: AccessRole, account: ManagedAddress) {
        self.require_role_admin();
        self.add_role_member(role, &account);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: AccessRole, account: ManagedAddress) {
        self.require_role_admin();
        self.remove_role_member(role, &account);
    }

    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: AccessRole) {
        let caller = self.blockchain().get_caller();
        self.remove_role_member(role, &caller);
    }

    // ── Named shortcuts ──

    #[endpoint(addWhitelisted)]
    fn add_whitelisted(&self, account: ManagedAddress) {
        self.grant_role(AccessRole::Whitelisted, account);
    }

    #[endpoint(removeWhitelisted)]
    fn remove_whitelisted(&self, account: ManagedAddress) {
        self.revoke_role(AccessRole::Whitelisted, account);
    }

    #[endpoint(renounceWhitelisted)]
    fn renounce_whitelisted(&self) {
        self.renounce_role(AccessRole::Whitelisted);
    }

    #[endpoint(addWhitelistAdmin)]
    fn add_whitelist_admin(&self, account: ManagedAddress) {
        self.grant_role(AccessRole::WhitelistAdmin, account);
    }

    #[endpoint(renounceWhitelistAdmin)]
    fn renounce_whitelist_admin(&self) {
        self.renounce_role(AccessRole::WhitelistAdmin);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasRole)]
    fn has_role(&self, role: AccessRole, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(isWhitelisted)]
    fn is_whitelisted(&self, account: &ManagedAddress) -> bool {
        self.has_role(AccessRole::Whitelisted, account)
    }

    #[view(isWhitelistAdmin)]
    fn is_whitelist_admin(&self, account: &ManagedAddress) -> bool {
        self.has_role(AccessRole::WhitelistAdmin, account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: AccessRole) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_UNAUTHORIZED);
    }

    fn require_role_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.has_role(AccessRole::WhitelistAdmin, &caller),
            ERR_UNAUTHORIZED
        );
    }

    fn add_role_member(&self, role: AccessRole, account: &ManagedAddress) {
        require!(!account.is_zero(), ERR_INVALID_ACCOUNT);
        require!(
            self.role_members(role).insert(account.clone()),
            ERR_ALREADY_HAS_ROLE
        );
        self.role_granted_event(role, account);
    }

    fn remove_role_member(&self, role: AccessRole, account: &ManagedAddress) {
        require!(
            self.role_members(role).swap_remove(account),
            ERR_MISSING_ROLE
        );
        self.role_revoked_event(role, account);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("roleGranted")]
    fn role_granted_event(&self, #[indexed] role: AccessRole, #[indexed] account: &ManagedAddress);

    #[event("roleRevoked")]
    fn role_revoked_event(&self, #[indexed] role: AccessRole, #[indexed] account: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: AccessRole) -> UnorderedSetMapper<ManagedAddress>;
}
