multiversx_sc::imports!();

use crate::contributions;
use crate::errors::{ERR_GOAL_REACHED, ERR_INVALID_GOAL, ERR_NOT_FINALIZED};

// ============================================================
// Refund escrow
// Purchase payments stay in the contract until finalization.
// Goal met: the whole escrow goes to the wallet in one transfer.
// Goal missed: every investor can pull back what they paid.
// Accounting is always written before EGLD leaves the contract.
// ============================================================

#[multiversx_sc::module]
pub trait RefundEscrowModule: contributions::ContributionsModule {
    fn init_refund_escrow(&self, goal: BigUint, cap: &BigUint) {
        require!(goal > 0u64 && goal <= *cap, ERR_INVALID_GOAL);
        self.goal().set(goal);
    }

    fn deposit(&self, amount: &BigUint) {
        self.escrow_balance().update(|balance| *balance += amount);
    }

    fn forward_escrow(&self, wallet: &ManagedAddress) {
        let amount = self.escrow_balance().take();
        self.funds_forwarded_event(wallet, &amount);

        if amount > 0u64 {
            self.send().direct_egld(wallet, &amount);
        }
    }

    fn enable_refunds(&self) {
        let balance = self.escrow_balance().get();
        self.refunds_enabled_event(&balance);
    }

    // ========================================================
    // ENDPOINT: claimRefund
    // Anyone may trigger the refund; EGLD always goes to the
    // investor. An already refunded investor is a no-op.
    // ========================================================

    #[endpoint(claimRefund)]
    fn claim_refund(&self, investor: ManagedAddress) {
        require!(self.finalized().get(), ERR_NOT_FINALIZED);
        require!(!self.goal_reached(), ERR_GOAL_REACHED);

        let payment = self.take_contribution(&investor);
        if payment == 0u64 {
            return;
        }

        self.escrow_balance().update(|balance| *balance -= &payment);
        self.refunded_event(&investor, &payment);

        self.send().direct_egld(&investor, &payment);
    }

    #[view(goalReached)]
    fn goal_reached(&self) -> bool {
        self.wei_raised().get() >= self.goal().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fundsForwarded")]
    fn funds_forwarded_event(&self, #[indexed] wallet: &ManagedAddress, amount: &BigUint);

    #[event("refundsEnabled")]
    fn refunds_enabled_event(&self, escrow_balance: &BigUint);

    #[event("refunded")]
    fn refunded_event(&self, #[indexed] investor: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getGoal)]
    #[storage_mapper("goal")]
    fn goal(&self) -> SingleValueMapper<BigUint>;

    #[view(isFinalized)]
    #[storage_mapper("finalized")]
    fn finalized(&self) -> SingleValueMapper<bool>;

    #[view(getEscrowBalance)]
    #[storage_mapper("escrowBalance")]
    fn escrow_balance(&self) -> SingleValueMapper<BigUint>;
}
