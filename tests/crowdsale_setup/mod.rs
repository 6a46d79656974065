#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::multiversx_sc::codec::{top_encode_to_vec_u8_or_panic, TopEncode};
use multiversx_sc_scenario::scenario_model::Log;

use crowdsale::crowdsale_proxy;
use crowdsale::types::AccessRole;
use sale_token::sale_token_proxy::{self, TokenRole};

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const WALLET: TestAddress = TestAddress::new("wallet");
pub const INVESTOR: TestAddress = TestAddress::new("investor");
pub const PURCHASER: TestAddress = TestAddress::new("purchaser");
pub const OTHER: TestAddress = TestAddress::new("other");
pub const NEW_BALANCE_1: TestAddress = TestAddress::new("new-balance-1");
pub const NEW_BALANCE_2: TestAddress = TestAddress::new("new-balance-2");
pub const NEW_BALANCE_3: TestAddress = TestAddress::new("new-balance-3");

pub const CROWDSALE_ADDRESS: TestSCAddress = TestSCAddress::new("crowdsale");
pub const TOKEN_ADDRESS: TestSCAddress = TestSCAddress::new("sale-token");
pub const CROWDSALE_CODE: MxscPath = MxscPath::new("output/crowdsale.mxsc.json");
pub const TOKEN_CODE: MxscPath = MxscPath::new("sale-token/output/sale-token.mxsc.json");

/// One whole EGLD in the scaled-down denomination used here, so every
/// balance and token amount fits in a u64.
pub const UNIT: u64 = 1_000_000_000_000;
pub const MILLI: u64 = UNIT / 1_000;

pub const PRESALE_RATE: u64 = 2;
pub const PUBLIC_SALE_RATE: u64 = 1;
pub const CAP: u64 = 100 * UNIT;
pub const GOAL: u64 = 25 * UNIT;
pub const INVESTOR_MIN: u64 = 2 * MILLI;
pub const INVESTOR_MAX: u64 = 50 * UNIT;

pub const TOKEN_SUPPLY: u64 = 1_000_000;
pub const ACCOUNT_BALANCE: u64 = 200 * UNIT;

pub const START: u64 = 1_000_000;
pub const WEEK: u64 = 7 * 24 * 60 * 60;
pub const OPENING_TIME: u64 = START + WEEK;
pub const CLOSING_TIME: u64 = OPENING_TIME + WEEK;
pub const AFTER_CLOSING_TIME: u64 = CLOSING_TIME + 1;

const BUYERS: [TestAddress; 6] = [
    INVESTOR,
    PURCHASER,
    OTHER,
    NEW_BALANCE_1,
    NEW_BALANCE_2,
    NEW_BALANCE_3,
];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CROWDSALE_CODE, crowdsale::ContractBuilder);
    blockchain.register_contract(TOKEN_CODE, sale_token::ContractBuilder);
    blockchain
}

#[derive(Clone)]
pub struct SaleParams {
    pub rate: u64,
    pub wallet: ManagedAddress<StaticApi>,
    pub token: ManagedAddress<StaticApi>,
    pub cap: u64,
    pub goal: u64,
    pub opening_time: u64,
    pub closing_time: u64,
    pub public_sale_rate: u64,
    pub investor_min: u64,
    pub investor_max: u64,
}

impl Default for SaleParams {
    fn default() -> Self {
        SaleParams {
            rate: PRESALE_RATE,
            wallet: WALLET.to_managed_address(),
            token: TOKEN_ADDRESS.to_managed_address(),
            cap: CAP,
            goal: GOAL,
            opening_time: OPENING_TIME,
            closing_time: CLOSING_TIME,
            public_sale_rate: PUBLIC_SALE_RATE,
            investor_min: INVESTOR_MIN,
            investor_max: INVESTOR_MAX,
        }
    }
}

/// Top-encoded bytes, the way event topics and data are written.
pub fn encoded<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

/// The single log named `identifier`, ignoring logs of nested calls.
pub fn single_log<'a>(logs: &'a [Log], identifier: &str) -> &'a Log {
    let matching: Vec<&Log> = logs
        .iter()
        .filter(|log| log.topics.first().map(Vec::as_slice) == Some(identifier.as_bytes()))
        .collect();
    assert_eq!(matching.len(), 1, "expected exactly one {identifier} log");
    matching[0]
}

pub struct CrowdsaleTestState {
    pub world: ScenarioWorld,
}

impl CrowdsaleTestState {
    /// Accounts funded, sale token deployed, clock at `START`.
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(ACCOUNT_BALANCE);
        world.account(WALLET).nonce(1).balance(0u64);
        for buyer in BUYERS {
            world.account(buyer).nonce(1).balance(ACCOUNT_BALANCE);
        }
        world.current_block().block_timestamp(START);

        world
            .tx()
            .from(OWNER)
            .typed(sale_token_proxy::SaleTokenProxy)
            .init(TOKEN_SUPPLY)
            .code(TOKEN_CODE)
            .new_address(TOKEN_ADDRESS)
            .run();

        Self { world }
    }

    /// Deployed with `params`, minter granted, investor and purchaser
    /// whitelisted, clock at the opening time.
    pub fn open_with(params: SaleParams) -> Self {
        let mut state = Self::new();
        state.deploy(params);
        state.grant_token_role(TokenRole::Minter, CROWDSALE_ADDRESS);
        state.whitelist(INVESTOR);
        state.whitelist(PURCHASER);
        state.set_block_timestamp(OPENING_TIME);
        state
    }

    pub fn open() -> Self {
        Self::open_with(SaleParams::default())
    }

    // ── Deployment ──

    pub fn deploy(&mut self, params: SaleParams) {
        self.world
            .tx()
            .from(OWNER)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .init(
                params.rate,
                params.wallet,
                params.token,
                params.cap,
                params.goal,
                params.opening_time,
                params.closing_time,
                params.public_sale_rate,
                params.investor_min,
                params.investor_max,
            )
            .code(CROWDSALE_CODE)
            .new_address(CROWDSALE_ADDRESS)
            .run();
    }

    pub fn deploy_expect_err(&mut self, params: SaleParams, err: &str) {
        self.world
            .tx()
            .from(OWNER)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .init(
                params.rate,
                params.wallet,
                params.token,
                params.cap,
                params.goal,
                params.opening_time,
                params.closing_time,
                params.public_sale_rate,
                params.investor_min,
                params.investor_max,
            )
            .code(CROWDSALE_CODE)
            .new_address(CROWDSALE_ADDRESS)
            .returns(ExpectError(4, err))
            .run();
    }

    // ── Setup helpers ──

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn grant_token_role(&mut self, role: TokenRole, account: TestSCAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN_ADDRESS)
            .typed(sale_token_proxy::SaleTokenProxy)
            .grant_role(role, account)
            .run();
    }

    pub fn pause_token(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(TOKEN_ADDRESS)
            .typed(sale_token_proxy::SaleTokenProxy)
            .pause()
            .run();
    }

    pub fn whitelist(&mut self, account: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .add_whitelisted(account)
            .run();
    }

    pub fn grant_role_expect_err(
        &mut self,
        from: TestAddress,
        role: AccessRole,
        account: TestAddress,
        err: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .grant_role(role, account)
            .returns(ExpectError(4, err))
            .run();
    }

    // ── Purchases ──

    pub fn buy_tokens(&mut self, from: TestAddress, beneficiary: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .buy_tokens(beneficiary)
            .egld(amount)
            .run();
    }

    pub fn buy_tokens_expect_err(
        &mut self,
        from: TestAddress,
        beneficiary: TestAddress,
        amount: u64,
        err: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .buy_tokens(beneficiary)
            .egld(amount)
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn buy(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .buy()
            .egld(amount)
            .run();
    }

    pub fn buy_expect_err(&mut self, from: TestAddress, amount: u64, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .buy()
            .egld(amount)
            .returns(ExpectError(4, err))
            .run();
    }

    // ── Settlement ──

    pub fn finalize(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .finalize()
            .run();
    }

    pub fn finalize_expect_err(&mut self, from: TestAddress, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .finalize()
            .returns(ExpectError(4, err))
            .run();
    }

    pub fn claim_refund(&mut self, from: TestAddress, investor: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .claim_refund(investor)
            .run();
    }

    pub fn claim_refund_expect_err(&mut self, from: TestAddress, investor: TestAddress, err: &str) {
        self.world
            .tx()
            .from(from)
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .claim_refund(investor)
            .returns(ExpectError(4, err))
            .run();
    }

    // ── Checks ──

    pub fn check_wei_raised(&mut self, expected: u64) {
        self.world
            .query()
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .wei_raised()
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_contribution(&mut self, investor: TestAddress, expected: u64) {
        self.world
            .query()
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .contribution(investor)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_escrow(&mut self, expected: u64) {
        self.world
            .query()
            .to(CROWDSALE_ADDRESS)
            .typed(crowdsale_proxy::CrowdsaleProxy)
            .escrow_balance()
            .returns(ExpectValue(expected))
            .run();
        self.world.check_account(CROWDSALE_ADDRESS).balance(expected);
    }

    pub fn check_egld_balance(&mut self, account: TestAddress, expected: u64) {
        self.world.check_account(account).balance(expected);
    }

    pub fn check_token_balance(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(TOKEN_ADDRESS)
            .typed(sale_token_proxy::SaleTokenProxy)
            .balance_of(account)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_token_role(&mut self, role: TokenRole, expected: bool) {
        self.world
            .query()
            .to(TOKEN_ADDRESS)
            .typed(sale_token_proxy::SaleTokenProxy)
            .has_role(role, CROWDSALE_ADDRESS)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_token_paused(&mut self, expected: bool) {
        self.world
            .query()
            .to(TOKEN_ADDRESS)
            .typed(sale_token_proxy::SaleTokenProxy)
            .paused()
            .returns(ExpectValue(expected))
            .run();
    }
}
