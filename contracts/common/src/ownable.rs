use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

// ── Core functions ───────────────────────────────────────────────────────────

/// Records the contract owner. Called once during initialization;
/// callers must ensure the slot is not already populated.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, if the contract has been initialized.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Returns true when `who` is the stored owner.
pub fn is_owner(env: &Env, who: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *who,
        None => false,
    }
}

// ── Two-step transfer ────────────────────────────────────────────────────────
//
// Ownership moves in two steps: the current owner proposes a successor,
// and the successor accepts. A proposal to a mistyped address is simply
// never accepted.

/// Stores `new_owner` as the proposed successor.
/// Callers must verify the proposer is the current owner first.
pub fn propose_owner(env: &Env, new_owner: &Address) {
    env.storage().instance().set(&PENDING_OWNER, new_owner);
}

/// Returns the proposed successor, if a transfer is in flight.
pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Completes the transfer if `who` matches the pending proposal.
///
/// Returns `true` when ownership changed hands; `false` when there is
/// no proposal or `who` is not the proposed successor.
pub fn accept_owner(env: &Env, who: &Address) -> bool {
    let pending: Option<Address> = env.storage().instance().get(&PENDING_OWNER);
    match pending {
        Some(pending) if pending == *who => {
            env.storage().instance().set(&OWNER, who);
            env.storage().instance().remove(&PENDING_OWNER);
            true
        }
        _ => false,
    }
}

/// Drops an in-flight proposal. Returns the address that was pending.
pub fn cancel_proposal(env: &Env) -> Option<Address> {
    let pending: Option<Address> = env.storage().instance().get(&PENDING_OWNER);
    if pending.is_some() {
        env.storage().instance().remove(&PENDING_OWNER);
    }
    pending
}

// ── Tests ────────────────────────────────────────────────────────────────────
