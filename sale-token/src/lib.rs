#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod sale_token_proxy;

// ============================================================
// Error messages
// ============================================================

const ERR_PAUSED: &str = "Pausable: paused";
const ERR_NOT_PAUSED: &str = "Pausable: not paused";
const ERR_NOT_MINTER: &str = "MinterRole: caller does not have the Minter role";
const ERR_NOT_PAUSER: &str = "PauserRole: caller does not have the Pauser role";
const ERR_ZERO_ADDRESS: &str = "InvalidAccount: zero address";
const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance: transfer amount exceeds balance";
const ERR_ALREADY_HAS_ROLE: &str = "AlreadyHasRole: account already has the role";
const ERR_MISSING_ROLE: &str = "MissingRole: account does not have the role";

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TokenRole {
    Minter,
    Pauser,
}

// ============================================================
// Contract
// Mintable, pausable fungible balance ledger. Holders of a role
// may grant it to others. Minting stays allowed while paused.
// ============================================================

#[multiversx_sc::contract]
pub trait SaleToken {
    #[init]
    fn init(&self, initial_supply: BigUint) {
        let deployer = self.blockchain().get_caller();
        self.add_role(TokenRole::Minter, &deployer);
        self.add_role(TokenRole::Pauser, &deployer);

        if initial_supply > 0u64 {
            self.mint_to(&deployer, &initial_supply);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // Balances
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, amount: BigUint) {
        self.require_role(TokenRole::Minter, ERR_NOT_MINTER);
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);
        self.mint_to(&to, &amount);
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        require!(!self.paused().get(), ERR_PAUSED);
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let from = self.blockchain().get_caller();
        let from_balance = self.balance(&from).get();
        require!(from_balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balance(&from).set(&from_balance - &amount);
        self.balance(&to).update(|balance| *balance += &amount);

        self.transfer_event(&from, &to, &amount);
    }

    // ========================================================
    // Pause
    // ========================================================

    #[endpoint(pause)]
    fn pause(&self) {
        self.require_role(TokenRole::Pauser, ERR_NOT_PAUSER);
        require!(!self.paused().get(), ERR_PAUSED);

        self.paused().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_role(TokenRole::Pauser, ERR_NOT_PAUSER);
        require!(self.paused().get(), ERR_NOT_PAUSED);

        self.paused().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    // ========================================================
    // Roles
    // ========================================================

    #[endpoint(grantRole)]
    fn grant_role(&self, role: TokenRole, account: ManagedAddress) {
        self.require_role(role, self.missing_role_message(role));
        self.add_role(role, &account);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: TokenRole, account: ManagedAddress) {
        self.require_role(role, self.missing_role_message(role));
        self.remove_role(role, &account);
    }

    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: TokenRole) {
        let caller = self.blockchain().get_caller();
        self.remove_role(role, &caller);
    }

    #[endpoint(addMinter)]
    fn add_minter(&self, account: ManagedAddress) {
        self.grant_role(TokenRole::Minter, account);
    }

    #[endpoint(renounceMinter)]
    fn renounce_minter(&self) {
        self.renounce_role(TokenRole::Minter);
    }

    #[endpoint(addPauser)]
    fn add_pauser(&self, account: ManagedAddress) {
        self.grant_role(TokenRole::Pauser, account);
    }

    #[endpoint(renouncePauser)]
    fn renounce_pauser(&self) {
        self.renounce_role(TokenRole::Pauser);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balance(account).get()
    }

    #[view(hasRole)]
    fn has_role(&self, role: TokenRole, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(isMinter)]
    fn is_minter(&self, account: &ManagedAddress) -> bool {
        self.has_role(TokenRole::Minter, account)
    }

    #[view(isPauser)]
    fn is_pauser(&self, account: &ManagedAddress) -> bool {
        self.has_role(TokenRole::Pauser, account)
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn mint_to(&self, to: &ManagedAddress, amount: &BigUint) {
        self.total_supply().update(|supply| *supply += amount);
        self.balance(to).update(|balance| *balance += amount);
        self.mint_event(to, amount);
    }

    fn require_role(&self, role: TokenRole, message: &str) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), message);
    }

    fn missing_role_message(&self, role: TokenRole) -> &'static str {
        match role {
            TokenRole::Minter => ERR_NOT_MINTER,
            TokenRole::Pauser => ERR_NOT_PAUSER,
        }
    }

    fn add_role(&self, role: TokenRole, account: &ManagedAddress) {
        require!(!account.is_zero(), ERR_ZERO_ADDRESS);
        require!(
            self.role_members(role).insert(account.clone()),
            ERR_ALREADY_HAS_ROLE
        );
        self.role_granted_event(role, account);
    }

    fn remove_role(&self, role: TokenRole, account: &ManagedAddress) {
        require!(self.role_members(role).swap_remove(account), ERR_MISSING_ROLE);
        self.role_revoked_event(role, account);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("paused")]
    fn paused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("roleGranted")]
    fn role_granted_event(&self, #[indexed] role: TokenRole, #[indexed] account: &ManagedAddress);

    #[event("roleRevoked")]
    fn role_revoked_event(&self, #[indexed] role: TokenRole, #[indexed] account: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(paused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: TokenRole) -> UnorderedSetMapper<ManagedAddress>;
}
