multiversx_sc::imports!();

use crate::access;
use crate::errors::ERR_INVALID_RATE;
use crate::types::CrowdsaleStage;

// ============================================================
// Rate schedule
// Fixed stage → rate table, the owner picks the active stage.
// ============================================================

#[multiversx_sc::module]
pub trait RateScheduleModule: access::AccessModule {
    fn init_rate_schedule(&self, presale_rate: BigUint, public_sale_rate: BigUint) {
        require!(presale_rate > 0u64, ERR_INVALID_RATE);
        require!(public_sale_rate > 0u64, ERR_INVALID_RATE);

        self.stage_rate(CrowdsaleStage::PreSale).set(presale_rate);
        self.stage_rate(CrowdsaleStage::PublicSale)
            .set(public_sale_rate);
        self.stage().set(CrowdsaleStage::PreSale);
    }

    #[endpoint(setCrowdsaleStage)]
    fn set_crowdsale_stage(&self, stage: CrowdsaleStage) {
        self.require_owner();

        self.stage().set(stage);
        let rate = self.stage_rate(stage).get();
        self.stage_changed_event(stage, &rate);
    }

    #[view(getRate)]
    fn current_rate(&self) -> BigUint {
        self.stage_rate(self.stage().get()).get()
    }

    /// Token units minted for `wei_amount`. Exact, no rounding.
    fn tokens_for(&self, wei_amount: &BigUint) -> BigUint {
        wei_amount * &self.current_rate()
    }

    #[event("stageChanged")]
    fn stage_changed_event(&self, #[indexed] stage: CrowdsaleStage, rate: &BigUint);

    #[view(getStage)]
    #[storage_mapper("stage")]
    fn stage(&self) -> SingleValueMapper<CrowdsaleStage>;

    #[view(getStageRate)]
    #[storage_mapper("stageRate")]
    fn stage_rate(&self, stage: CrowdsaleStage) -> SingleValueMapper<BigUint>;
}
