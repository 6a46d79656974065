multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Crowdsale Stage: selects the active conversion rate
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum CrowdsaleStage {
    PreSale,
    PublicSale,
}

// ============================================================
// Sale Status: derived lifecycle state, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, Clone, Copy, PartialEq, Debug)]
pub enum SaleStatus {
    /// Before the opening time.
    Pending,
    /// Within the purchase window.
    Open,
    /// Past the closing time, finalize not called yet.
    Closed,
    /// Escrow forwarded to the wallet. Terminal state.
    FinalizedGoalMet,
    /// Escrow kept for refunds. Terminal state.
    FinalizedGoalUnmet,
}

// ============================================================
// Access Role: role tables held by the crowdsale itself
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum AccessRole {
    /// Manages both role tables.
    WhitelistAdmin,
    /// Allowed to receive tokens from a purchase.
    Whitelisted,
}
