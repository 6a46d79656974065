multiversx_sc::imports!();

use crate::contributions;
use crate::errors::{
    ERR_CAP_EXCEEDED, ERR_INVALID_CAP, ERR_INVALID_INVESTOR_CAP, ERR_INVESTOR_CAP_VIOLATION,
};

// ============================================================
// Cap policy
// Global hard cap plus per-investor bounds on the cumulative
// contribution. Once an investor's total reaches the minimum,
// any follow-up that keeps the total under the maximum passes.
// ============================================================

#[multiversx_sc::module]
pub trait CapPolicyModule: contributions::ContributionsModule {
    fn init_cap_policy(
        &self,
        cap: &BigUint,
        investor_min_contribution: BigUint,
        investor_max_contribution: BigUint,
    ) {
        require!(*cap > 0u64, ERR_INVALID_CAP);
        require!(
            investor_max_contribution > 0u64
                && investor_min_contribution <= investor_max_contribution,
            ERR_INVALID_INVESTOR_CAP
        );

        self.cap().set(cap);
        self.investor_min_contribution()
            .set(investor_min_contribution);
        self.investor_max_contribution()
            .set(investor_max_contribution);
    }

    fn validate_contribution(&self, amount: &BigUint, contributed: &BigUint) {
        let raised_after = &self.wei_raised().get() + amount;
        require!(raised_after <= self.cap().get(), ERR_CAP_EXCEEDED);

        let new_total = contributed + amount;
        require!(
            new_total >= self.investor_min_contribution().get()
                && new_total <= self.investor_max_contribution().get(),
            ERR_INVESTOR_CAP_VIOLATION
        );
    }

    #[view(capReached)]
    fn cap_reached(&self) -> bool {
        self.wei_raised().get() >= self.cap().get()
    }

    #[view(getInvestorCaps)]
    fn get_investor_caps(&self) -> MultiValue2<BigUint, BigUint> {
        let min = self.investor_min_contribution().get();
        let max = self.investor_max_contribution().get();
        (min, max).into()
    }

    #[view(getCap)]
    #[storage_mapper("cap")]
    fn cap(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investorMinContribution")]
    fn investor_min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("investorMaxContribution")]
    fn investor_max_contribution(&self) -> SingleValueMapper<BigUint>;
}
