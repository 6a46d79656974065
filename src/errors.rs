// ============================================================
// Error messages
// Every message starts with its kind so callers can match on it.
// ============================================================

// ── Purchase ──
pub const ERR_NOT_OPEN: &str = "NotOpen: crowdsale is not open";
pub const ERR_INVALID_BENEFICIARY: &str = "InvalidBeneficiary: beneficiary is the zero address";
pub const ERR_NOT_WHITELISTED: &str =
    "NotWhitelisted: beneficiary does not have the Whitelisted role";
pub const ERR_ZERO_AMOUNT: &str = "ZeroAmount: payment is 0";
pub const ERR_CAP_EXCEEDED: &str = "CapExceeded: purchase exceeds the hard cap";
pub const ERR_INVESTOR_CAP_VIOLATION: &str =
    "InvestorCapViolation: contribution is outside the per-investor bounds";
pub const ERR_MINT_FAILED: &str = "MintFailed: crowdsale cannot mint on the token";

// ── Lifecycle ──
pub const ERR_NOT_CLOSED: &str = "NotClosed: crowdsale has not closed yet";
pub const ERR_ALREADY_CLOSED: &str = "AlreadyClosed: crowdsale has already closed";
pub const ERR_ALREADY_FINALIZED: &str = "AlreadyFinalized: crowdsale is already finalized";
pub const ERR_NOT_FINALIZED: &str = "NotFinalized: crowdsale is not finalized";
pub const ERR_GOAL_REACHED: &str = "GoalReached: refunds are disabled, the goal was reached";

// ── Construction ──
pub const ERR_INVALID_TIME_RANGE: &str = "InvalidTimeRange: opening/closing times are invalid";
pub const ERR_INVALID_CAP: &str = "InvalidCap: cap is 0";
pub const ERR_INVALID_GOAL: &str = "InvalidGoal: goal must be positive and not above the cap";
pub const ERR_INVALID_RATE: &str = "InvalidRate: rate is 0";
pub const ERR_INVALID_WALLET: &str = "InvalidWallet: wallet is the zero address";
pub const ERR_INVALID_TOKEN: &str = "InvalidToken: token is not a smart contract";
pub const ERR_INVALID_INVESTOR_CAP: &str =
    "InvalidInvestorCap: investor minimum is above the maximum";

// ── Access ──
pub const ERR_UNAUTHORIZED: &str = "Unauthorized: caller lacks the required role";
pub const ERR_INVALID_ACCOUNT: &str = "InvalidAccount: account is the zero address";
pub const ERR_ALREADY_HAS_ROLE: &str = "AlreadyHasRole: account already has the role";
pub const ERR_MISSING_ROLE: &str = "MissingRole: account does not have the role";
