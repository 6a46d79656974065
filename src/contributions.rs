multiversx_sc::imports!();

// ============================================================
// Contribution ledger
// Source of truth for the goal decision and for refunds.
// ============================================================

#[multiversx_sc::module]
pub trait ContributionsModule {
    fn record_contribution(&self, beneficiary: &ManagedAddress, amount: &BigUint) {
        self.wei_raised().update(|raised| *raised += amount);
        self.contribution(beneficiary)
            .update(|contributed| *contributed += amount);
    }

    /// Clears the investor's entry and returns what it held.
    fn take_contribution(&self, investor: &ManagedAddress) -> BigUint {
        self.contribution(investor).take()
    }

    #[view(getWeiRaised)]
    #[storage_mapper("weiRaised")]
    fn wei_raised(&self) -> SingleValueMapper<BigUint>;

    #[view(getContribution)]
    #[storage_mapper("contribution")]
    fn contribution(&self, investor: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
