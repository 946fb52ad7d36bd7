use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::TIP_STATS_SEED;
use crate::helpers::transfers::create_pda_account;
use crate::state::{TipStats, UserIdentity};

/// An address that has never been created by this program
pub fn needs_creation(info: &AccountInfo) -> bool {
    info.owner == &system_program::ID
}

/// Default-on-miss read path for lazily created entries
///
/// An address the program never created reads as `T::default()`; an
/// existing account is deserialized (discriminator checked).
pub fn load_or_default<T: AccountDeserialize + Default>(
    info: &AccountInfo,
    program_id: &Pubkey,
) -> Result<T> {
    if info.owner != program_id || info.data_is_empty() {
        return Ok(T::default());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Writes `value` (discriminator included) back into the account data
pub fn store<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    value.try_serialize(&mut writer)
}

/// Opens `account`'s stats for writing, creating the PDA on first use.
/// The caller persists the result with `store`.
pub fn open_tip_stats<'info>(
    payer: &AccountInfo<'info>,
    stats_info: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    program_id: &Pubkey,
    account: Pubkey,
    bump: u8,
) -> Result<TipStats> {
    if !needs_creation(stats_info) {
        let mut stats: TipStats = load_or_default(stats_info, program_id)?;
        stats.bind(account, bump);
        return Ok(stats);
    }

    let bump_seed = [bump];
    let seeds: &[&[u8]] = &[TIP_STATS_SEED, account.as_ref(), &bump_seed];
    create_pda_account(
        payer,
        stats_info,
        system_program,
        program_id,
        8 + TipStats::LEN,
        seeds,
    )?;

    Ok(TipStats::new(account, bump))
}

/// Stats for `account`, all-zero when it never tipped or was tipped
pub fn read_tip_stats(info: &AccountInfo, program_id: &Pubkey, account: Pubkey) -> Result<TipStats> {
    let mut stats: TipStats = load_or_default(info, program_id)?;
    stats.bind(account, stats.bump);
    Ok(stats)
}

/// Identity for `account`, empty and unverified when never registered
pub fn read_identity(info: &AccountInfo, program_id: &Pubkey, account: Pubkey) -> Result<UserIdentity> {
    let mut identity: UserIdentity = load_or_default(info, program_id)?;
    if identity.account == Pubkey::default() {
        identity.account = account;
    }
    Ok(identity)
}
