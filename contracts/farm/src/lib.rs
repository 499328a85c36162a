#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env};

use farm_core::engine::{self, FarmError, Program, StakerPosition, Unrestricted};

/// Fixed-rate staking reward farm.
///
/// Stake the program's stake token, accrue a proportional share of a
/// flat per-second reward emission between `start_time` and `end_time`,
/// and withdraw or claim at any moment. Withdrawals pay out pending
/// rewards in the same call.
#[contract]
pub struct FarmContract;

#[contractimpl]
impl FarmContract {
    // ── Initialization ──────────────────────────────────────────────────────

    /// Bootstrap the farm.
    ///
    /// * `stake_token`  – SAC address of the token users stake.
    /// * `reward_token` – SAC address of the token paid out as rewards.
    /// * `start_time` / `end_time` – accrual window; the end must be
    ///   strictly after the start and in the future.
    /// * `reward_rate` – reward tokens emitted per second across all
    ///   stakers, constant for the whole program.
    pub fn initialize(
        env: Env,
        owner: Address,
        stake_token: Address,
        reward_token: Address,
        start_time: u64,
        end_time: u64,
        reward_rate: i128,
    ) -> Result<(), FarmError> {
        engine::initialize(
            &env,
            owner,
            stake_token,
            reward_token,
            start_time,
            end_time,
            reward_rate,
        )
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), FarmError> {
        staker.require_auth();
        engine::stake(&env, staker, amount)
    }

    /// Withdraw `amount` stake tokens. Pending rewards are paid out in
    /// the same call.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), FarmError> {
        staker.require_auth();
        engine::withdraw(&env, staker, amount, &Unrestricted)
    }

    /// Claim all accrued rewards. Returns the amount transferred; a
    /// claim with nothing pending returns zero without erroring.
    pub fn claim(env: Env, staker: Address) -> Result<i128, FarmError> {
        staker.require_auth();
        engine::claim(&env, staker)
    }

    // ── Views ───────────────────────────────────────────────────────────────

    /// Real-time pending rewards, matching what `claim` would pay now.
    pub fn get_pending_rewards(env: Env, account: Address) -> i128 {
        engine::pending_rewards(&env, account)
    }

    /// Combined stake/pending/claimed snapshot for one account.
    pub fn get_position(env: Env, account: Address) -> StakerPosition {
        engine::position(&env, account)
    }

    pub fn get_staked(env: Env, account: Address) -> i128 {
        engine::staked_of(&env, account)
    }

    /// Lifetime rewards actually transferred to `account`.
    pub fn get_claimed(env: Env, account: Address) -> i128 {
        engine::claimed_of(&env, account)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        engine::total_staked(&env)
    }

    pub fn get_program(env: Env) -> Result<Program, FarmError> {
        engine::program(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, FarmError> {
        engine::owner(&env)
    }

    // ── Admin ───────────────────────────────────────────────────────────────

    /// Sweep surplus tokens to the owner. Staked principal cannot be
    /// swept; everything else can.
    pub fn withdraw_excess(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), FarmError> {
        caller.require_auth();
        engine::withdraw_excess(&env, caller, token, amount)
    }

    /// Propose a successor owner. The successor completes the transfer
    /// with `accept_owner`.
    pub fn propose_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), FarmError> {
        caller.require_auth();
        engine::propose_owner(&env, caller, new_owner)
    }

    /// Accept a pending ownership proposal.
    pub fn accept_owner(env: Env, caller: Address) -> Result<(), FarmError> {
        caller.require_auth();
        engine::accept_owner(&env, caller)
    }

    /// Drop a pending ownership proposal.
    pub fn cancel_owner_proposal(env: Env, caller: Address) -> Result<(), FarmError> {
        caller.require_auth();
        engine::cancel_owner_proposal(&env, caller)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        engine::pending_owner(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
