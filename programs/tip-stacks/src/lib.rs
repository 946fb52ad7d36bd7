use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod formal_verification;

pub use constants::*;
pub use contexts::*;
pub use errors::ErrorCode;
pub use events::*;
pub use helpers::*;
pub use state::*;

declare_id!("3nXBcwfm6UTZistpDCvdvDMWiHtcSwEiSLGVV5QBnWcN");

#[program]
pub mod tip_stacks {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let treasury_key = ctx.accounts.treasury.key();
        let config_key = ctx.accounts.config.key();

        let config = &mut ctx.accounts.config;
        config.admin = ctx.accounts.admin.key();
        config.treasury = treasury_key;
        config.address = config_key;
        config.bump = ctx.bumps.config;
        config.treasury_bump = ctx.bumps.treasury;

        let treasury = &mut ctx.accounts.treasury;
        treasury.bump = ctx.bumps.treasury;
        treasury.total_tips = 0;
        treasury.total_volume = 0;
        treasury.total_fees_collected = 0;
        treasury.total_fees_withdrawn = 0;

        emit!(PlatformInitialized {
            admin: config.admin,
            config: config_key,
            treasury: treasury_key,
        });

        msg!("Platform initialized, admin {}", config.admin);
        Ok(())
    }

    pub fn tip(ctx: Context<Tip>, amount: u64, token_tag: String) -> Result<bool> {
        let sender_key = ctx.accounts.sender.key();
        let recipient_key = ctx.accounts.recipient.key();

        // Every check runs before any account is created or any value moves
        let plan = TipPlan::build(
            &ctx.accounts.config,
            sender_key,
            recipient_key,
            amount,
            &token_tag,
            ctx.accounts.sender_stats.reward_rate(),
        )?;

        #[cfg(feature = "verbose")]
        msg!(
            "Tip plan: amount={}, fee={}, net={}, points={}",
            plan.amount, plan.platform_fee, plan.net_amount, plan.reward_points
        );

        let sender_info = ctx.accounts.sender.to_account_info();
        let system_info = ctx.accounts.system_program.to_account_info();
        let recipient_stats_info = ctx.accounts.recipient_stats.to_account_info();

        let mut recipient_stats = open_tip_stats(
            &sender_info,
            &recipient_stats_info,
            &system_info,
            ctx.program_id,
            recipient_key,
            ctx.bumps.recipient_stats,
        )?;

        transfer_lamports(
            &sender_info,
            &ctx.accounts.recipient.to_account_info(),
            &system_info,
            plan.net_amount,
        )?;
        transfer_lamports(
            &sender_info,
            &ctx.accounts.treasury.to_account_info(),
            &system_info,
            plan.platform_fee,
        )?;

        let sender_stats = &mut ctx.accounts.sender_stats;
        sender_stats.bind(sender_key, ctx.bumps.sender_stats);
        plan.apply_to_sender(sender_stats);

        plan.apply_to_recipient(&mut recipient_stats);
        store(&recipient_stats_info, &recipient_stats)?;

        plan.apply_to_treasury(&mut ctx.accounts.treasury);

        emit!(TipSent {
            sender: sender_key,
            recipient: recipient_key,
            amount: plan.amount,
            platform_fee: plan.platform_fee,
            net_amount: plan.net_amount,
            reward_points: plan.reward_points,
        });

        msg!(
            "Tip sent: {} lamports (fee {}, net {}, +{} points)",
            plan.amount, plan.platform_fee, plan.net_amount, plan.reward_points
        );

        Ok(true)
    }

    pub fn set_user_identity(
        ctx: Context<SetUserIdentity>,
        account: Pubkey,
        username: String,
    ) -> Result<bool> {
        validate_identity_request(&ctx.accounts.owner.key(), &account, &username)?;

        let (record_address, record_bump) = username_record_address(&username, ctx.program_id);
        require_keys_eq!(
            ctx.accounts.username_record.key(),
            record_address,
            ErrorCode::UsernameRecordMismatch
        );

        let record_info = ctx.accounts.username_record.to_account_info();
        let mut record: UsernameRecord = load_or_default(&record_info, ctx.program_id)?;

        let change = IdentityChange::plan(account, &username, &ctx.accounts.identity, &record)?;

        // Resolve the record being released before mutating anything
        let mut previous = match change.released_seed() {
            Some(previous_seed) => {
                let info = ctx
                    .accounts
                    .previous_username_record
                    .as_ref()
                    .ok_or(ErrorCode::UsernameRecordMismatch)?
                    .to_account_info();
                let (expected, _) =
                    Pubkey::find_program_address(&[USERNAME_SEED, &previous_seed], ctx.program_id);
                require_keys_eq!(info.key(), expected, ErrorCode::UsernameRecordMismatch);
                let previous_record: UsernameRecord = load_or_default(&info, ctx.program_id)?;
                Some((info, previous_record))
            }
            None => None,
        };

        if needs_creation(&record_info) {
            let seed = username_seed(&username);
            let bump_seed = [record_bump];
            let seeds: &[&[u8]] = &[USERNAME_SEED, &seed, &bump_seed];
            create_pda_account(
                &ctx.accounts.owner.to_account_info(),
                &record_info,
                &ctx.accounts.system_program.to_account_info(),
                ctx.program_id,
                8 + UsernameRecord::LEN,
                seeds,
            )?;
        }

        change.apply(
            &mut ctx.accounts.identity,
            ctx.bumps.identity,
            &mut record,
            record_bump,
            previous.as_mut().map(|(_, previous_record)| previous_record),
        );

        if let Some((info, previous_record)) = &previous {
            store(info, previous_record)?;
        }
        store(&record_info, &record)?;

        emit!(IdentityRegistered {
            account,
            username: change.username.clone(),
            released_username: change.released_username.clone(),
        });

        msg!("Identity registered: {} -> {}", account, change.username);
        Ok(true)
    }

    pub fn update_user_reward_points(
        ctx: Context<UpdateUserRewardPoints>,
        account: Pubkey,
        value: u64,
    ) -> Result<bool> {
        validate_admin(&ctx.accounts.config, &ctx.accounts.admin.key())?;

        let stats_info = ctx.accounts.user_stats.to_account_info();

        let mut stats = open_tip_stats(
            &ctx.accounts.admin.to_account_info(),
            &stats_info,
            &ctx.accounts.system_program.to_account_info(),
            ctx.program_id,
            account,
            ctx.bumps.user_stats,
        )?;

        let previous_rate = stats.set_reward_rate(value);
        store(&stats_info, &stats)?;

        emit!(UserRewardRateUpdated {
            account,
            previous_rate,
            new_rate: value,
        });

        msg!("Reward rate for {} set to {} points", account, value);
        Ok(true)
    }

    pub fn withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>, amount: u64) -> Result<bool> {
        validate_admin(&ctx.accounts.config, &ctx.accounts.admin.key())?;

        let treasury_info = ctx.accounts.treasury.to_account_info();
        let admin_info = ctx.accounts.admin.to_account_info();

        let rent_floor = Rent::get()?.minimum_balance(treasury_info.data_len());
        let available = withdrawable_fees(treasury_info.lamports(), rent_floor);
        validate_withdrawal(amount, available)?;

        **treasury_info.try_borrow_mut_lamports()? -= amount;
        **admin_info.try_borrow_mut_lamports()? += amount;

        let treasury = &mut ctx.accounts.treasury;
        treasury.record_withdrawal(amount);

        emit!(PlatformFeesWithdrawn {
            admin: admin_info.key(),
            amount,
            total_withdrawn: treasury.total_fees_withdrawn,
        });

        #[cfg(feature = "verbose")]
        msg!("Treasury: available={}, rent_floor={}", available, rent_floor);

        msg!("Platform fees withdrawn: {} lamports", amount);
        Ok(true)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // READ-ONLY QUERIES
    // ══════════════════════════════════════════════════════════════════════════

    pub fn get_user_tip_stats(ctx: Context<ReadTipStats>, account: Pubkey) -> Result<TipStatsView> {
        let stats = read_tip_stats(&ctx.accounts.tip_stats.to_account_info(), ctx.program_id, account)?;
        Ok(stats.view())
    }

    pub fn get_total_tips_sent(ctx: Context<ReadTipStats>, account: Pubkey) -> Result<u64> {
        let stats = read_tip_stats(&ctx.accounts.tip_stats.to_account_info(), ctx.program_id, account)?;
        Ok(stats.total_sent)
    }

    pub fn get_total_tips_received(ctx: Context<ReadTipStats>, account: Pubkey) -> Result<u64> {
        let stats = read_tip_stats(&ctx.accounts.tip_stats.to_account_info(), ctx.program_id, account)?;
        Ok(stats.total_received)
    }

    /// Points `account` would earn for a tip of `amount`; no transfer needed
    pub fn get_reward_points(ctx: Context<ReadTipStats>, account: Pubkey, amount: u64) -> Result<u64> {
        let stats = read_tip_stats(&ctx.accounts.tip_stats.to_account_info(), ctx.program_id, account)?;
        Ok(compute_reward_points(amount, stats.reward_rate()))
    }

    pub fn get_user_identity(ctx: Context<ReadUserIdentity>, account: Pubkey) -> Result<IdentityView> {
        let identity = read_identity(&ctx.accounts.identity.to_account_info(), ctx.program_id, account)?;
        Ok(identity.view())
    }

    /// Owner of `username`, or the default key when nobody holds it
    pub fn resolve_username(ctx: Context<ResolveUsername>, username: String) -> Result<Pubkey> {
        let (record_address, _) = username_record_address(&username, ctx.program_id);
        require_keys_eq!(
            ctx.accounts.username_record.key(),
            record_address,
            ErrorCode::UsernameRecordMismatch
        );

        let record: UsernameRecord =
            load_or_default(&ctx.accounts.username_record.to_account_info(), ctx.program_id)?;
        Ok(record.owner)
    }

    pub fn get_platform_stats(ctx: Context<ReadPlatformStats>) -> Result<PlatformStatsView> {
        Ok(ctx.accounts.treasury.view())
    }
}
