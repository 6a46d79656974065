multiversx_sc::imports!();

use crate::access;
use crate::errors::{ERR_ALREADY_CLOSED, ERR_INVALID_TIME_RANGE, ERR_NOT_OPEN};

// ============================================================
// Time window
// Purchases are accepted while opening_time <= now < closing_time.
// The owner may push the closing time later until the sale closes.
// ============================================================

#[multiversx_sc::module]
pub trait TimeWindowModule: access::AccessModule {
    fn init_time_window(&self, opening_time: u64, closing_time: u64) {
        let now = self.blockchain().get_block_timestamp();
        require!(opening_time >= now, ERR_INVALID_TIME_RANGE);
        require!(closing_time > opening_time, ERR_INVALID_TIME_RANGE);

        self.opening_time().set(opening_time);
        self.closing_time().set(closing_time);
    }

    #[endpoint(extendTime)]
    fn extend_time(&self, new_closing_time: u64) {
        self.require_owner();
        require!(!self.has_closed(), ERR_ALREADY_CLOSED);

        let prev_closing_time = self.closing_time().get();
        require!(new_closing_time > prev_closing_time, ERR_INVALID_TIME_RANGE);

        self.closing_time().set(new_closing_time);
        self.time_extended_event(prev_closing_time, new_closing_time);
    }

    #[view(isOpen)]
    fn is_open(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        now >= self.opening_time().get() && now < self.closing_time().get()
    }

    #[view(hasClosed)]
    fn has_closed(&self) -> bool {
        self.blockchain().get_block_timestamp() >= self.closing_time().get()
    }

    fn require_open(&self) {
        require!(self.is_open(), ERR_NOT_OPEN);
    }

    #[event("timeExtended")]
    fn time_extended_event(
        &self,
        #[indexed] prev_closing_time: u64,
        #[indexed] new_closing_time: u64,
    );

    #[view(getOpeningTime)]
    #[storage_mapper("openingTime")]
    fn opening_time(&self) -> SingleValueMapper<u64>;

    #[view(getClosingTime)]
    #[storage_mapper("closingTime")]
    fn closing_time(&self) -> SingleValueMapper<u64>;
}
