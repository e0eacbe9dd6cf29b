// Shared LiteSVM helpers for the mint-distribution integration tests
//
// Build the program first, then run from the workspace root:
//   anchor build
//   cargo test-sbf
#![cfg(feature = "test-sbf")]
#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use litesvm::{types::TransactionMetadata, LiteSVM};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as SYSTEM_PROGRAM_ID;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("uUFps28eb2Br6L8Yp3M8xZsgocyGBwwLBp39TDE4VfV");

// PDA seed (must match constants.rs)
pub const CONTRIBUTOR_RECORD_SEED: &[u8] = b"contributor_record";

// Custom error codes (6000 + index in errors.rs)
pub const ERR_ALREADY_INITIALIZED: u32 = 6000;
pub const ERR_UNAUTHORIZED: u32 = 6001;
pub const ERR_INVALID_DISTRIBUTION: u32 = 6002;
pub const ERR_BELOW_MINIMUM_TRANSFER: u32 = 6003;
pub const ERR_DESTINATION_MISMATCH: u32 = 6004;
pub const ERR_INSUFFICIENT_FUNDS: u32 = 6005;

// Anchor's AccountDiscriminatorMismatch
pub const ERR_ACCOUNT_DISCRIMINATOR_MISMATCH: u32 = 3002;

// ======================== HELPERS ========================

/// Load the compiled program binary into LiteSVM
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/mint_distribution.so");
    svm.add_program(PROGRAM_ID, program_bytes)
        .expect("program should load");
    svm
}

/// Create a new keypair and fund it with SOL via airdrop
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn balance(svm: &LiteSVM, key: &Pubkey) -> u64 {
    svm.get_account(key).map(|account| account.lamports).unwrap_or(0)
}

/// Derive the contributor record PDA using seeds: ["contributor_record", contributor]
pub fn derive_contributor_record_pda(contributor: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONTRIBUTOR_RECORD_SEED, contributor.as_ref()], &PROGRAM_ID)
}

/// Build Anchor instruction discriminator (8 bytes from sighash of "global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

/// Build Anchor event discriminator (8 bytes from sighash of "event:EventName")
pub fn event_discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("event:{}", name);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

/// Borsh payloads of every `name` event emitted via `Program data:` log lines
pub fn emitted_events(metadata: &TransactionMetadata, name: &str) -> Vec<Vec<u8>> {
    let discriminator = event_discriminator(name);
    metadata
        .logs
        .iter()
        .filter_map(|line| line.strip_prefix("Program data: "))
        .filter_map(|encoded| STANDARD.decode(encoded).ok())
        .filter(|bytes| bytes.starts_with(&discriminator))
        .map(|bytes| bytes[8..].to_vec())
        .collect()
}

// ======================== INSTRUCTION BUILDERS ========================

pub fn build_initialize_ix(
    payer: &Pubkey,
    state: &Pubkey,
    owner: &Pubkey,
    payout_destination_a: &Pubkey,
    payout_destination_b: &Pubkey,
) -> Instruction {
    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(owner.as_ref());
    data.extend_from_slice(payout_destination_a.as_ref());
    data.extend_from_slice(payout_destination_b.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*state, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_contribute_ix(
    contributor: &Pubkey,
    state: &Pubkey,
    destinations: [&Pubkey; 3],
    amount: u64,
) -> Instruction {
    let (contributor_record, _) = derive_contributor_record_pda(contributor);

    let mut data = anchor_discriminator("contribute").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*contributor, true),
            AccountMeta::new(*state, false),
            AccountMeta::new(contributor_record, false),
            AccountMeta::new(*destinations[0], false),
            AccountMeta::new(*destinations[1], false),
            AccountMeta::new(*destinations[2], false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

/// Build any owner-only setter; `args` is the Borsh-encoded argument list
pub fn build_update_state_ix(method: &str, owner: &Pubkey, state: &Pubkey, args: &[u8]) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(args);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*state, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data,
    }
}

pub fn shares_args(share_a_bps: u16, share_b_bps: u16, share_c_bps: u16) -> Vec<u8> {
    let mut args = share_a_bps.to_le_bytes().to_vec();
    args.extend_from_slice(&share_b_bps.to_le_bytes());
    args.extend_from_slice(&share_c_bps.to_le_bytes());
    args
}

pub fn build_query_state_ix(state: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(*state, false)],
        data: anchor_discriminator("query_state").to_vec(),
    }
}

pub fn build_query_contributor_ix(contributor: &Pubkey) -> Instruction {
    let (contributor_record, _) = derive_contributor_record_pda(contributor);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*contributor, false),
            AccountMeta::new_readonly(contributor_record, false),
        ],
        data: anchor_discriminator("query_contributor").to_vec(),
    }
}

// ======================== TRANSACTION HELPERS ========================

/// Send a transaction and expect success
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionMetadata {
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), signers, svm.latest_blockhash());
    match svm.send_transaction(tx) {
        Ok(metadata) => metadata,
        Err(e) => panic!("Transaction should succeed: {:?}", e),
    }
}

/// Send a transaction and expect failure, returning the debug-formatted error
pub fn send_tx_expect_failure(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair, signers: &[&Keypair]) -> String {
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), signers, svm.latest_blockhash());
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

pub fn assert_custom_error(error: &str, code: u32) {
    let expected = format!("Custom({})", code);
    assert!(error.contains(&expected), "expected {} in {}", expected, error);
}

// ======================== ACCOUNT DECODING ========================

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[offset..offset + 32]);
    Pubkey::new_from_array(bytes)
}

pub fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateView {
    pub owner: Pubkey,
    pub payout_destination_a: Pubkey,
    pub payout_destination_b: Pubkey,
    pub payout_destination_c: Pubkey,
    pub minimum_transfer: u64,
    pub total_points: u64,
    pub shares: (u16, u16, u16),
    pub is_initialized: bool,
}

/// DistributionState layout:
/// 8 discriminator | 4 x 32 pubkeys | 8 minimum_transfer | 8 total_points | 3 x 2 shares | 1 is_initialized
pub fn read_state(svm: &LiteSVM, state: &Pubkey) -> StateView {
    let account = svm.get_account(state).expect("State account should exist");
    assert_eq!(account.owner, PROGRAM_ID);
    let data = &account.data;

    StateView {
        owner: read_pubkey(data, 8),
        payout_destination_a: read_pubkey(data, 40),
        payout_destination_b: read_pubkey(data, 72),
        payout_destination_c: read_pubkey(data, 104),
        minimum_transfer: read_u64(data, 136),
        total_points: read_u64(data, 144),
        shares: (read_u16(data, 152), read_u16(data, 154), read_u16(data, 156)),
        is_initialized: data[158] == 1,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorView {
    pub contributor: Pubkey,
    pub points: u64,
    pub contribution_count: u32,
}

/// ContributorRecord layout:
/// 8 discriminator | 32 contributor | 8 points | 4 contribution_count | 8 timestamp | 1 bump
pub fn read_contributor_record(svm: &LiteSVM, contributor: &Pubkey) -> Option<ContributorView> {
    let (record, _) = derive_contributor_record_pda(contributor);
    let account = svm.get_account(&record)?;
    if account.data.is_empty() {
        return None;
    }
    let data = &account.data;

    Some(ContributorView {
        contributor: read_pubkey(data, 8),
        points: read_u64(data, 40),
        contribution_count: u32::from_le_bytes([data[48], data[49], data[50], data[51]]),
    })
}

// ======================== SETUP HELPERS ========================

pub struct Deployment {
    pub payer: Keypair,
    pub state: Keypair,
    pub owner: Keypair,
    pub payout_destination_a: Keypair,
    pub payout_destination_b: Keypair,
}

impl Deployment {
    /// Destination C is the payer, as set by `initialize`
    pub fn destinations(&self) -> [Pubkey; 3] {
        [
            self.payout_destination_a.pubkey(),
            self.payout_destination_b.pubkey(),
            self.payer.pubkey(),
        ]
    }
}

/// Fund every party and initialize a fresh state account
pub fn deploy(svm: &mut LiteSVM) -> Deployment {
    let sol = solana_sdk::native_token::LAMPORTS_PER_SOL;
    let deployment = Deployment {
        payer: create_funded_account(svm, 10 * sol),
        state: Keypair::new(),
        owner: create_funded_account(svm, sol),
        payout_destination_a: create_funded_account(svm, sol),
        payout_destination_b: create_funded_account(svm, sol),
    };

    let ix = build_initialize_ix(
        &deployment.payer.pubkey(),
        &deployment.state.pubkey(),
        &deployment.owner.pubkey(),
        &deployment.payout_destination_a.pubkey(),
        &deployment.payout_destination_b.pubkey(),
    );
    send_tx_expect_success(svm, ix, &deployment.payer, &[&deployment.payer, &deployment.state]);

    deployment
}

pub fn contribute(
    svm: &mut LiteSVM,
    deployment: &Deployment,
    contributor: &Keypair,
    amount: u64,
) -> Result<TransactionMetadata, String> {
    let [a, b, c] = deployment.destinations();
    let ix = build_contribute_ix(&contributor.pubkey(), &deployment.state.pubkey(), [&a, &b, &c], amount);
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&contributor.pubkey()), &[contributor], svm.latest_blockhash());
    svm.send_transaction(tx).map_err(|e| format!("{:?}", e))
}

/// Owner call to `set_distribution_shares`
pub fn set_shares(svm: &mut LiteSVM, deployment: &Deployment, share_a_bps: u16, share_b_bps: u16, share_c_bps: u16) {
    let ix = build_update_state_ix(
        "set_distribution_shares",
        &deployment.owner.pubkey(),
        &deployment.state.pubkey(),
        &shares_args(share_a_bps, share_b_bps, share_c_bps),
    );
    send_tx_expect_success(svm, ix, &deployment.owner, &[&deployment.owner]);
}
