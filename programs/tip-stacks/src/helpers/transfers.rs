use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Moves lamports between accounts through the system program.
/// Zero amounts are skipped.
#[inline(never)]
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Creates a rent-exempt PDA owned by `owner`, paid by `payer`
///
/// Mirrors what `init` does: if someone already sent lamports to the
/// address, top it up and allocate/assign instead of create_account
/// (which fails on a funded address).
#[inline(never)]
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    owner: &Pubkey,
    space: usize,
    seeds: &[&[u8]],
) -> Result<()> {
    let required_lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                &[seeds],
            ),
            required_lamports,
            space as u64,
            owner,
        );
    }

    transfer_lamports(
        payer,
        target,
        system_program,
        required_lamports.saturating_sub(current_lamports),
    )?;

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Allocate {
                account_to_allocate: target.clone(),
            },
            &[seeds],
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Assign {
                account_to_assign: target.clone(),
            },
            &[seeds],
        ),
        owner,
    )
}
