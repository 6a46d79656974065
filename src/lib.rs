#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod cap_policy;
pub mod contributions;
pub mod crowdsale_proxy;
pub mod errors;
pub mod rate_schedule;
pub mod refund_escrow;
pub mod sale_token_proxy;
pub mod time_window;
pub mod types;

use errors::{
    ERR_ALREADY_FINALIZED, ERR_INVALID_BENEFICIARY, ERR_INVALID_TOKEN, ERR_INVALID_WALLET,
    ERR_MINT_FAILED, ERR_NOT_CLOSED, ERR_NOT_WHITELISTED, ERR_ZERO_AMOUNT,
};
use sale_token_proxy::TokenRole;
use types::{AccessRole, SaleStatus};

// ============================================================
// Contract
// A capped, timed, whitelisted, refundable crowdsale that mints
// a sale token per purchase and escrows EGLD until finalization.
// ============================================================

#[multiversx_sc::contract]
pub trait Crowdsale:
    access::AccessModule
    + rate_schedule::RateScheduleModule
    + time_window::TimeWindowModule
    + contributions::ContributionsModule
    + cap_policy::CapPolicyModule
    + refund_escrow::RefundEscrowModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `rate` is the PreSale rate, `public_sale_rate` the PublicSale one.
    #[init]
    fn init(
        &self,
        rate: BigUint,
        wallet: ManagedAddress,
        token_address: ManagedAddress,
        cap: BigUint,
        goal: BigUint,
        opening_time: u64,
        closing_time: u64,
        public_sale_rate: BigUint,
        investor_min_contribution: BigUint,
        investor_max_contribution: BigUint,
    ) {
        require!(!wallet.is_zero(), ERR_INVALID_WALLET);
        require!(
            self.blockchain().is_smart_contract(&token_address),
            ERR_INVALID_TOKEN
        );

        self.init_rate_schedule(rate, public_sale_rate);
        self.init_time_window(opening_time, closing_time);
        self.init_cap_policy(&cap, investor_min_contribution, investor_max_contribution);
        self.init_refund_escrow(goal, &cap);

        self.wallet().set(&wallet);
        self.token().set(&token_address);

        let deployer = self.blockchain().get_caller();
        self.init_access(&deployer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: buyTokens
    // Caller pays, beneficiary receives the minted tokens.
    // ========================================================

    #[endpoint(buyTokens)]
    #[payable("EGLD")]
    fn buy_tokens(&self, beneficiary: ManagedAddress) {
        let purchaser = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.process_purchase(&purchaser, &beneficiary, &amount);
    }

    // ========================================================
    // ENDPOINT: buy
    // Bare payment, the caller is also the beneficiary.
    // ========================================================

    #[endpoint(buy)]
    #[payable("EGLD")]
    fn buy(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.process_purchase(&caller, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: finalize
    // Callable once by anyone after the window closes.
    // ========================================================

    #[endpoint(finalize)]
    fn finalize(&self) {
        require!(self.has_closed(), ERR_NOT_CLOSED);
        require!(!self.finalized().get(), ERR_ALREADY_FINALIZED);
        self.finalized().set(true);

        if self.goal_reached() {
            self.forward_escrow(&self.wallet().get());
            self.release_token();
        } else {
            self.enable_refunds();
        }

        self.crowdsale_finalized_event();
    }

    // ========================================================
    // INTERNAL: purchase pipeline
    // Every check runs before the first write; the mint call
    // comes last so a failing token reverts the whole call.
    // ========================================================

    fn process_purchase(
        &self,
        purchaser: &ManagedAddress,
        beneficiary: &ManagedAddress,
        amount: &BigUint,
    ) {
        self.require_open();
        require!(!beneficiary.is_zero(), ERR_INVALID_BENEFICIARY);
        require!(
            self.has_role(AccessRole::Whitelisted, beneficiary),
            ERR_NOT_WHITELISTED
        );
        require!(*amount > 0u64, ERR_ZERO_AMOUNT);

        let contributed = self.contribution(beneficiary).get();
        self.validate_contribution(amount, &contributed);
        require!(self.token_role_held(TokenRole::Minter), ERR_MINT_FAILED);

        let tokens = self.tokens_for(amount);

        self.record_contribution(beneficiary, amount);
        self.deposit(amount);

        self.tx()
            .to(&self.token().get())
            .typed(sale_token_proxy::SaleTokenProxy)
            .mint(beneficiary, &tokens)
            .sync_call();

        self.tokens_purchased_event(purchaser, beneficiary, amount, &tokens);
    }

    // ========================================================
    // INTERNAL: token side of finalization
    // Drops the minter role for good and lifts the transfer
    // pause when this contract is allowed to.
    // ========================================================

    fn release_token(&self) {
        let token_address = self.token().get();

        if self.token_role_held(TokenRole::Minter) {
            self.tx()
                .to(&token_address)
                .typed(sale_token_proxy::SaleTokenProxy)
                .renounce_role(TokenRole::Minter)
                .sync_call();
        }

        let paused: bool = self
            .tx()
            .to(&token_address)
            .typed(sale_token_proxy::SaleTokenProxy)
            .paused()
            .returns(ReturnsResult)
            .sync_call();

        if paused && self.token_role_held(TokenRole::Pauser) {
            self.tx()
                .to(&token_address)
                .typed(sale_token_proxy::SaleTokenProxy)
                .unpause()
                .sync_call();
        }
    }

    fn token_role_held(&self, role: TokenRole) -> bool {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&self.token().get())
            .typed(sale_token_proxy::SaleTokenProxy)
            .has_role(role, own_address)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getStatus)]
    fn status(&self) -> SaleStatus {
        if self.finalized().get() {
            if self.goal_reached() {
                SaleStatus::FinalizedGoalMet
            } else {
                SaleStatus::FinalizedGoalUnmet
            }
        } else if self.has_closed() {
            SaleStatus::Closed
        } else if self.is_open() {
            SaleStatus::Open
        } else {
            SaleStatus::Pending
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("tokensPurchased")]
    fn tokens_purchased_event(
        &self,
        #[indexed] purchaser: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] value: &BigUint,
        amount: &BigUint,
    );

    #[event("crowdsaleFinalized")]
    fn crowdsale_finalized_event(&self);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getWallet)]
    #[storage_mapper("wallet")]
    fn wallet(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<ManagedAddress>;
}
